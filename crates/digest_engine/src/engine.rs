use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use viewer_logging::viewer_debug;

use crate::loader::DigestLoader;
use crate::EngineEvent;

enum EngineCommand {
    LoadDigest,
}

/// Receives engine results on the engine thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs loads on a background tokio runtime so the caller's loop never blocks.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(loader: DigestLoader, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .enable_io()
            .build()?;
        let loader = Arc::new(loader);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::LoadDigest => {
                        let loader = loader.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            let event = match loader.load().await {
                                Ok(document) => EngineEvent::DigestLoaded(Box::new(document)),
                                Err(err) => EngineEvent::DigestFailed(err),
                            };
                            sink.emit(event);
                        });
                    }
                }
            }
            viewer_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn load_digest(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadDigest);
    }
}
