//! Scripted replay of pointer, keyboard and prop events through a controller.
//!
//! A script is JSON: the container height, an optional initial state and a
//! list of events tagged by `type`. Replaying it yields one line per
//! committed transition plus the final snapshot. `snapsheet-replay` is a thin
//! wrapper that prints these as JSON lines.

use crate::config::{SheetConfig, SheetOptions};
use crate::controller::{SheetController, SheetSnapshot};
use crate::error::{SheetError, SheetResult};
use crate::types::{DragZone, PointerEvent, SheetKey, SnapState, Transition, TransitionReason};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    pub container_height: f32,
    /// Overrides the config's initial state when present
    #[serde(default)]
    pub initial_state: Option<SnapState>,
    pub events: Vec<ScriptEvent>,
}

impl Script {
    pub fn from_json_str(json: &str) -> SheetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown {
        pointer_id: u64,
        y: f32,
        time_ms: u64,
        /// Present for presses on the content region
        #[serde(default)]
        scroll_top: Option<f32>,
    },
    PointerMove { pointer_id: u64, y: f32, time_ms: u64 },
    PointerUp { pointer_id: u64, y: f32, time_ms: u64 },
    PointerCancel { pointer_id: u64 },
    Key { key: SheetKey },
    Backdrop,
    SnapPoint { value: Option<SnapState> },
    SnapTo { state: String },
    Open { open: bool },
    Resize { height: f32 },
}

/// One committed transition, tagged with the index of the event that caused it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionLine {
    pub event: usize,
    pub from: SnapState,
    pub to: SnapState,
    pub reason: TransitionReason,
}

/// Everything a replay produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayOutput {
    pub transitions: Vec<TransitionLine>,
    /// Indices of events that asked the parent to close the sheet
    pub close_requests: Vec<usize>,
    pub snapshot: SheetSnapshot,
}

/// Why a replay stopped
#[derive(Error, Debug)]
pub enum ReplayError {
    /// The script's geometry or the config could not build a controller
    #[error("cannot create sheet: {0}")]
    Setup(#[from] SheetError),

    /// A script event the controller rejected
    #[error("event #{event}: {source}")]
    Event { event: usize, source: SheetError },
}

/// Replay `script` against a fresh controller built from `config`
pub fn run(script: Script, config: SheetConfig) -> Result<ReplayOutput, ReplayError> {
    let options = SheetOptions {
        initial_state: script.initial_state,
        on_state_change: None,
    };
    let mut sheet = SheetController::new(script.container_height, config, options)?;

    let committed: Rc<RefCell<Vec<Transition>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = committed.clone();
    sheet.set_on_transition(move |t| sink.borrow_mut().push(t));
    let closes = Rc::new(RefCell::new(0usize));
    let close_sink = closes.clone();
    sheet.set_on_close(move || *close_sink.borrow_mut() += 1);

    let mut output = ReplayOutput {
        transitions: Vec::new(),
        close_requests: Vec::new(),
        snapshot: sheet.inspect(),
    };

    for (index, event) in script.events.into_iter().enumerate() {
        debug!(event = index, ?event, "replaying");
        apply(&mut sheet, event).map_err(|source| ReplayError::Event { event: index, source })?;

        output.transitions.extend(committed.borrow_mut().drain(..).map(|t| TransitionLine {
            event: index,
            from: t.from,
            to: t.to,
            reason: t.reason,
        }));
        if std::mem::take(&mut *closes.borrow_mut()) > 0 {
            info!(event = index, "close requested");
            output.close_requests.push(index);
        }
    }

    output.snapshot = sheet.inspect();
    Ok(output)
}

/// Dispatch one script event to the matching controller entry point
pub fn apply(sheet: &mut SheetController, event: ScriptEvent) -> SheetResult<()> {
    match event {
        ScriptEvent::PointerDown {
            pointer_id,
            y,
            time_ms,
            scroll_top,
        } => {
            let zone = match scroll_top {
                Some(scroll_top) => DragZone::Content { scroll_top },
                None => DragZone::Handle,
            };
            sheet.handle_pointer_down(&PointerEvent::at_ms(pointer_id, y, time_ms), zone);
        }
        ScriptEvent::PointerMove { pointer_id, y, time_ms } => {
            sheet.handle_pointer_move(&PointerEvent::at_ms(pointer_id, y, time_ms));
        }
        ScriptEvent::PointerUp { pointer_id, y, time_ms } => {
            sheet.handle_pointer_up(&PointerEvent::at_ms(pointer_id, y, time_ms));
        }
        ScriptEvent::PointerCancel { pointer_id } => {
            sheet.handle_pointer_cancel(pointer_id);
        }
        ScriptEvent::Key { key } => {
            sheet.handle_key(key);
        }
        ScriptEvent::Backdrop => {
            sheet.handle_backdrop_click();
        }
        ScriptEvent::SnapPoint { value } => {
            sheet.set_snap_point(value);
        }
        ScriptEvent::SnapTo { state } => sheet.snap_to_named(&state)?,
        ScriptEvent::Open { open } => sheet.set_open(open),
        ScriptEvent::Resize { height } => sheet.set_container_height(height)?,
    }
    Ok(())
}
