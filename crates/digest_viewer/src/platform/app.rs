use std::sync::{mpsc, Arc};

use anyhow::Context;
use digest_core::{update, AppState, Effect, Msg};
use digest_engine::{DigestLoader, PagePublisher, ReqwestFetcher};
use viewer_logging::{viewer_debug, viewer_error, viewer_info};

use super::cli::Args;
use super::effects::EffectRunner;
use super::input::spawn_stdin_reader;
use super::ui;
use super::ui::ports::{PagePorts, ViewPorts};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Core(Msg),
    Quit,
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let fetcher = ReqwestFetcher::new(args.fetch_settings()).context("building http client")?;
    let loader = DigestLoader::new(Arc::new(fetcher), &args.base_url, args.loader_settings())
        .context("resolving digest location")?;
    viewer_info!("Digest source: {}", loader.url());

    let (tx, rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(loader, tx.clone()).context("starting engine")?;

    let ports = PagePorts::new(PagePublisher::new(args.out.clone()));
    viewer_info!("Rendering to {:?}", ports.target());
    let mut controller = Controller::new(ports);

    // Applied once the document is in; selecting before that is a no-op.
    let mut initial_selection: Vec<Msg> = args
        .tab
        .map(Msg::TabSelected)
        .into_iter()
        .chain(args.date.clone().map(Msg::DateSelected))
        .collect();

    runner.enqueue(controller.dispatch(Msg::Started));
    if !args.once {
        spawn_stdin_reader(tx.clone());
    }
    drop(tx);

    while let Ok(event) = rx.recv() {
        let msg = match event {
            AppEvent::Quit => break,
            AppEvent::Core(msg) => msg,
        };
        let settles_load = matches!(msg, Msg::DigestLoaded(_) | Msg::DigestLoadFailed { .. });
        runner.enqueue(controller.dispatch(msg));

        if settles_load {
            for msg in initial_selection.drain(..) {
                runner.enqueue(controller.dispatch(msg));
            }
            if args.once {
                break;
            }
        }
    }

    viewer_info!("Viewer stopped");
    Ok(())
}

/// Owns the selection state; every change goes through `dispatch`, which
/// re-renders whenever the state reports a change.
pub struct Controller<P: ViewPorts> {
    state: AppState,
    ports: P,
}

impl<P: ViewPorts> Controller<P> {
    pub fn new(ports: P) -> Self {
        Self {
            state: AppState::new(),
            ports,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        viewer_debug!("dispatch {}", describe(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty {
            let view = self.state.view();
            if let Err(err) = ui::render::render(&view, &mut self.ports) {
                viewer_error!("Failed to publish page: {}", err);
            }
        }
        effects
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn ports(&self) -> &P {
        &self.ports
    }
}

/// Log-friendly message summary; documents are large.
fn describe(msg: &Msg) -> String {
    match msg {
        Msg::DigestLoaded(document) => format!("DigestLoaded({} dates)", document.dates.len()),
        other => format!("{other:?}"),
    }
}
