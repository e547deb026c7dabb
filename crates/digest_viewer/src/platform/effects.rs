use std::io;
use std::sync::{mpsc, Arc};

use digest_core::{Effect, Msg};
use digest_engine::{DigestLoader, EngineEvent, EngineHandle, EventSink};
use viewer_logging::{viewer_error, viewer_info, viewer_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(loader: DigestLoader, tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let engine = EngineHandle::new(loader, Arc::new(MsgSink { tx }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadDigest => {
                    viewer_info!("Loading digest");
                    self.engine.load_digest();
                }
                Effect::ReportLoadFailure { message } => {
                    viewer_error!("Digest unavailable, showing failure placeholder: {}", message);
                }
            }
        }
    }
}

/// Turns engine results into controller messages.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let msg = engine_event_to_msg(event);
        if self.tx.send(AppEvent::Core(msg)).is_err() {
            viewer_warn!("Controller gone; dropping engine result");
        }
    }
}

fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DigestLoaded(document) => Msg::DigestLoaded(document),
        EngineEvent::DigestFailed(err) => Msg::DigestLoadFailed {
            message: err.to_string(),
        },
    }
}
