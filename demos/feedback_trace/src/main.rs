// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated touch session that exercises the tracing and diagnostics
//! pipeline.
//!
//! Replays a scripted session over a four-tab navigation model at 60 steps
//! per second, recording events to both a
//! [`PrettyPrintSink`](capillary_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](capillary_debug::recorder::RecorderSink), then exports a
//! Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use capillary_core::feedback::HideAction;
use capillary_core::time::{HostTime, Timebase};
use capillary_core::touch::TouchEvent;
use capillary_core::trace::{
    ContractStartEvent, CycleSettledEvent, CycleSummaryBuilder, EvaluateSummary,
    HideRequestEvent, PageChangeEvent, RippleShownEvent, TabPressEvent, TouchDispatchEvent,
    TraceSink, Tracer,
};

use capillary_nav::bar::{BarRippleEdge, BarStyle};
use capillary_nav::model::{NavChanges, NavConfig, NavEvent, NavModel, NavResponse};
use capillary_nav::tabs::TabDescriptor;

use capillary_debug::pretty::PrettyPrintSink;
use capillary_debug::recorder::RecorderSink;

/// Step interval in milliseconds (≈60 Hz).
const STEP_MS: u64 = 16;
const SESSION_MS: u64 = 4_000;
const BAR_WIDTH: f64 = 390.0;

fn main() {
    // 1 tick = 1ms.
    let timebase = Timebase::new(1_000_000, 1);

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(std::io::stdout()), timebase);
    let mut recorder = RecorderSink::new();

    // -- model -------------------------------------------------------------
    let config = NavConfig {
        style: BarStyle::android(),
        tabs: vec![
            TabDescriptor::new("Home"),
            TabDescriptor::new("Search"),
            TabDescriptor::new("Library"),
            TabDescriptor::new("Profile"),
        ],
        initial_tab: 0,
        animated_switch: true,
    };
    let mut model = NavModel::new(config, timebase);
    model.set_layout(BAR_WIDTH, HostTime(0));

    // -- scripted session --------------------------------------------------
    // A tap on tab 1, a rapid tap on tab 2 released mid-expand, a cancelled
    // press on tab 3, and a re-press of the active tab.
    let script: &[(u64, TouchEvent)] = &[
        (200, TouchEvent::down(180.0, 28.0)),
        (380, TouchEvent::up(180.0, 28.0)),
        (1_000, TouchEvent::down(240.0, 28.0)),
        (1_040, TouchEvent::up(240.0, 28.0)),
        (1_800, TouchEvent::down(300.0, 28.0)),
        (1_950, TouchEvent::cancel(300.0, 28.0)),
        (2_600, TouchEvent::down(200.0, 28.0)),
        (2_700, TouchEvent::up(200.0, 28.0)),
    ];

    // -- simulated loop ----------------------------------------------------
    let mut changes = NavChanges::default();
    let mut cycle: Option<CycleSummaryBuilder> = None;
    let mut next_touch = 0;
    let mut frame_index: u64 = 0;
    let mut now_ms: u64 = 0;

    while now_ms <= SESSION_MS {
        let now = HostTime(now_ms);

        // 1. Deliver due touches with their scripted timestamps.
        while next_touch < script.len() && script[next_touch].0 <= now_ms {
            let (at_ms, event) = script[next_touch];
            next_touch += 1;
            let at = HostTime(at_ms);
            let response = model.handle_touch(event, at);
            emit_touch(&mut pretty, &mut recorder, at, event, &response);
            emit_ripple_edge(&mut pretty, &mut recorder, at, &response, &mut cycle);
            emit_outcomes(&mut pretty, &mut recorder, at, &response);
        }

        // One programmatic switch back to the first page.
        if now_ms == 3_200
            && let Some(NavEvent::PageChanged { from, to }) = model.go_to_page(0, now)
        {
            let e = PageChangeEvent {
                timestamp: now,
                from: index_u32(from),
                to: index_u32(to),
            };
            pretty.on_page_change(&e);
            recorder.on_page_change(&e);
        }

        // 2. Evaluate.
        model.evaluate_into(now, &mut changes);

        // 3. Shared-ripple edges crossed during this step.
        let edges = changes.bar_ripple;
        if edges.expand_finished && let Some(builder) = &mut cycle {
            builder.expand_done(now);
        }
        if edges.contract_started {
            let e = ContractStartEvent {
                timestamp: now,
                deferred: true,
            };
            pretty.on_contract_start(&e);
            recorder.on_contract_start(&e);
            if let Some(builder) = &mut cycle {
                builder.fade_start(now, true);
            }
        }
        if edges.settled {
            let e = CycleSettledEvent { timestamp: now };
            pretty.on_cycle_settled(&e);
            recorder.on_cycle_settled(&e);
            if let Some(mut builder) = cycle.take() {
                builder.settled(now);
                let summary = builder.finish();
                pretty.on_cycle_summary(&summary);
                recorder.on_cycle_summary(&summary);
            }
        }

        // 4. Per-step evaluation summary.
        let summary = summarize(frame_index, now, &changes);
        pretty.on_evaluate_summary(&summary);
        recorder.on_evaluate_summary(&summary);

        // Also exercise the Tracer wrapper (proves it compiles and dispatches).
        if frame_index == 0 {
            let mut tracer = Tracer::new(&mut pretty);
            tracer.evaluate_summary(&summary);
        }

        frame_index += 1;
        now_ms += STEP_MS;
    }

    // -- export Chrome trace -----------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    capillary_debug::chrome::export(recorder.as_bytes(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({frame_index} steps)");
}

fn emit_touch(
    pretty: &mut PrettyPrintSink,
    recorder: &mut RecorderSink,
    at: HostTime,
    event: TouchEvent,
    response: &NavResponse,
) {
    let e = TouchDispatchEvent {
        timestamp: at,
        phase: event.phase,
        x: event.position.x,
        y: event.position.y,
        tab: response.touch.tab.map(index_u32),
    };
    pretty.on_touch(&e);
    recorder.on_touch(&e);
}

fn emit_ripple_edge(
    pretty: &mut PrettyPrintSink,
    recorder: &mut RecorderSink,
    at: HostTime,
    response: &NavResponse,
    cycle: &mut Option<CycleSummaryBuilder>,
) {
    match response.touch.bar_ripple {
        Some(BarRippleEdge::Shown { radius }) => {
            let e = RippleShownEvent {
                timestamp: at,
                radius,
            };
            pretty.on_ripple_shown(&e);
            recorder.on_ripple_shown(&e);
            *cycle = Some(CycleSummaryBuilder::new(at));
        }
        Some(BarRippleEdge::Hide(action)) => {
            let e = HideRequestEvent {
                timestamp: at,
                action,
            };
            pretty.on_hide_request(&e);
            recorder.on_hide_request(&e);
            if action == HideAction::Immediate {
                let contract = ContractStartEvent {
                    timestamp: at,
                    deferred: false,
                };
                pretty.on_contract_start(&contract);
                recorder.on_contract_start(&contract);
                if let Some(builder) = cycle {
                    builder.fade_start(at, false);
                }
            }
        }
        None => {}
    }
}

fn emit_outcomes(
    pretty: &mut PrettyPrintSink,
    recorder: &mut RecorderSink,
    at: HostTime,
    response: &NavResponse,
) {
    if let Some(press) = response.touch.press {
        let e = TabPressEvent {
            timestamp: at,
            tab: index_u32(press.tab),
            outcome: press.outcome,
        };
        pretty.on_tab_press(&e);
        recorder.on_tab_press(&e);
    }
    if let Some(NavEvent::PageChanged { from, to }) = response.event {
        let e = PageChangeEvent {
            timestamp: at,
            from: index_u32(from),
            to: index_u32(to),
        };
        pretty.on_page_change(&e);
        recorder.on_page_change(&e);
    }
}

fn summarize(frame_index: u64, now: HostTime, changes: &NavChanges) -> EvaluateSummary {
    EvaluateSummary {
        frame_index,
        timestamp: now,
        geometry_changes: count(&changes.geometry),
        opacity_changes: count(&changes.opacity),
        color_changes: count(&changes.color),
        label_changes: count(&changes.label),
        shadow_changes: count(&changes.shadow),
    }
}

fn count(nodes: &[u32]) -> u32 {
    u32::try_from(nodes.len()).unwrap_or(u32::MAX)
}

fn index_u32(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
