// Copyright 2026 the Capillary Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted gesture mix against one feedback instance and audits
//! the recording for sequencing violations.
//!
//! The script covers the interesting release timings: a slow tap, a rapid
//! tap released mid-expand, a re-press that discards a parked fade, and a
//! cancelled press. Exits nonzero when the audit flags anything.

use capillary_core::feedback::{RippleFeedback, RippleStyle};
use capillary_core::time::{Duration, HostTime, Timebase};
use capillary_core::touch::TouchEvent;
use capillary_touch_harness::{SessionScript, StepConfig, grade_session, run_script};

use kurbo::{Point, Size};

const STEP_MS: u64 = 10;
const SESSION_MS: u64 = 3_200;

fn main() {
    // 1 tick = 1ms.
    let timebase = Timebase::new(1_000_000, 1);

    let mut feedback = RippleFeedback::new(RippleStyle::default(), timebase);
    feedback.set_frame(Point::new(0.0, 0.0));
    feedback.on_layout(Size::new(96.0, 56.0));

    let mut script = SessionScript::new();
    // Slow tap: the fade starts on release, after the expand is done.
    script.tap(HostTime(100), HostTime(400), 48.0, 28.0);
    // Rapid tap: released mid-expand, so the fade parks until 1200.
    script.tap(HostTime(1_000), HostTime(1_050), 48.0, 28.0);
    // Re-press at 1580 discards the fade parked at 1540 and restarts.
    script.tap(HostTime(1_500), HostTime(1_540), 20.0, 20.0);
    script.tap(HostTime(1_580), HostTime(1_900), 20.0, 20.0);
    // A cancelled press fades just like a release.
    script.push(HostTime(2_400), TouchEvent::down(70.0, 30.0));
    script.push(HostTime(2_500), TouchEvent::cancel(70.0, 30.0));

    let steps = StepConfig {
        start: HostTime(0),
        end: HostTime(SESSION_MS),
        interval: Duration(STEP_MS),
    };
    let samples = run_script(&mut feedback, &script, steps);
    let report = grade_session(&samples);

    println!(
        "{} touches over {} steps: {} cycles settled, {} fades released off an expand",
        script.len(),
        report.samples,
        report.cycles,
        report.deferred_hides,
    );
    for violation in &report.violations {
        println!(
            "violation at {}ms: {:?}",
            violation.at.ticks(),
            violation.kind
        );
    }
    if !report.clean {
        std::process::exit(1);
    }
    println!("sequencing clean");
}
