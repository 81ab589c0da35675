// Host-side tests for the ambient audio state machine over a recording backend

mod common;

use common::{failing_connect, mock_connect, test_config, Call, MockBackend, NodeId};
use ember_core::constants::{RAMP_TIME_CONSTANT_SEC, STOP_GRACE_SEC, TONE_HZ};
use ember_core::{AmbientType, AudioEngine, AudioError};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

fn engine() -> AudioEngine<MockBackend> {
    AudioEngine::new(&test_config(), mock_connect())
}

fn backend(audio: &AudioEngine<MockBackend>) -> &MockBackend {
    audio.backend().expect("context opened")
}

#[test]
fn context_is_not_opened_before_a_gesture() {
    let audio = engine();
    assert!(!audio.has_context());
    assert_eq!(audio.active(), AmbientType::Off);
}

#[test]
fn first_selection_builds_shared_graph_and_starts_noise() {
    let mut audio = engine();
    assert_eq!(audio.select(AmbientType::Brown), Ok(AmbientType::Brown));

    let b = backend(&audio);
    let gain = *audio.gain_node().expect("gain");
    let filter = *audio.filter_node().expect("filter");
    assert!(b.calls.contains(&Call::CreateLowpass {
        id: filter,
        cutoff_hz: 1000.0,
        output: gain
    }));
    // two seconds of samples at the backend rate
    assert!(b.calls.iter().any(|c| matches!(
        c,
        Call::PlayNoise { len: 16_000, input, .. } if *input == filter
    )));
    assert_eq!(b.playing.len(), 1);
    assert_eq!(b.last_gain_target(), Some(0.5));
}

#[test]
fn reselecting_the_active_type_mutes() {
    let mut audio = engine();
    audio.select(AmbientType::Pink).expect("pink");
    assert_eq!(audio.select(AmbientType::Pink), Ok(AmbientType::Off));
    assert_eq!(audio.active(), AmbientType::Off);
    assert!(audio.source_node().is_none());
    assert!(backend(&audio).playing.is_empty());
}

#[test]
fn selecting_off_mutes() {
    let mut audio = engine();
    audio.select(AmbientType::White).expect("white");
    assert_eq!(audio.select(AmbientType::Off), Ok(AmbientType::Off));
    assert!(backend(&audio).playing.is_empty());
}

#[test]
fn switching_types_keeps_one_source_and_the_same_nodes() {
    let mut audio = engine();
    audio.select(AmbientType::Brown).expect("brown");
    let gain = *audio.gain_node().expect("gain");
    let filter = *audio.filter_node().expect("filter");

    for kind in [AmbientType::White, AmbientType::Tone432, AmbientType::Pink] {
        assert_eq!(audio.select(kind), Ok(kind));
        assert_eq!(audio.gain_node(), Some(&gain));
        assert_eq!(audio.filter_node(), Some(&filter));
        assert_eq!(backend(&audio).playing.len(), 1, "after {kind:?}");
    }

    let b = backend(&audio);
    assert_eq!(b.count(|c| matches!(c, Call::CreateGain { .. })), 1);
    assert_eq!(b.count(|c| matches!(c, Call::CreateLowpass { .. })), 1);
}

#[test]
fn tone_bypasses_the_filter() {
    let mut audio = engine();
    audio.select(AmbientType::Tone432).expect("tone");
    let gain = *audio.gain_node().expect("gain");
    assert!(backend(&audio).calls.iter().any(|c| matches!(
        c,
        Call::PlayTone { freq_hz, output, .. } if *freq_hz == TONE_HZ && *output == gain
    )));
}

#[test]
fn stop_fades_then_stops_after_grace_period() {
    let mut audio = engine();
    audio.select(AmbientType::Brown).expect("brown");
    let source = *audio.source_node().expect("source");
    let gain = *audio.gain_node().expect("gain");
    audio.stop();

    let b = backend(&audio);
    let n = b.calls.len();
    assert_eq!(
        b.calls[n - 2],
        Call::RampGain {
            gain,
            target: 0.0,
            tau: RAMP_TIME_CONSTANT_SEC
        }
    );
    assert_eq!(
        b.calls[n - 1],
        Call::Stop {
            source,
            delay_sec: STOP_GRACE_SEC
        }
    );
}

#[test]
fn switching_hard_stops_the_previous_source() {
    let mut audio = engine();
    audio.select(AmbientType::Brown).expect("brown");
    let first = *audio.source_node().expect("source");
    audio.select(AmbientType::White).expect("white");
    assert!(backend(&audio).calls.contains(&Call::Stop {
        source: first,
        delay_sec: 0.0
    }));
}

#[test]
fn pointer_corners_map_to_parameter_extremes() {
    let mut audio = engine();
    audio.select(AmbientType::Brown).expect("brown");
    let canvas = Vec2::new(800.0, 600.0);

    audio.control(Vec2::new(0.0, 0.0), canvas).expect("control");
    assert_eq!(backend(&audio).last_cutoff_target(), Some(100.0));
    assert_eq!(backend(&audio).last_gain_target(), Some(1.0));

    audio.control(Vec2::new(800.0, 600.0), canvas).expect("control");
    assert_eq!(backend(&audio).last_cutoff_target(), Some(5000.0));
    assert_eq!(backend(&audio).last_gain_target(), Some(0.0));

    audio.control(Vec2::new(-50.0, 900.0), canvas).expect("control");
    assert_eq!(backend(&audio).last_cutoff_target(), Some(100.0));
    assert_eq!(backend(&audio).last_gain_target(), Some(0.0));
}

#[test]
fn tone_control_changes_gain_only() {
    let mut audio = engine();
    audio.select(AmbientType::Tone432).expect("tone");
    audio
        .control(Vec2::new(400.0, 150.0), Vec2::new(800.0, 600.0))
        .expect("control");
    let b = backend(&audio);
    assert_eq!(b.count(|c| matches!(c, Call::RampCutoff { .. })), 0);
    assert_eq!(b.last_gain_target(), Some(0.75));
}

#[test]
fn control_while_off_only_wakes_the_context() {
    let mut audio = engine();
    audio
        .control(Vec2::new(10.0, 10.0), Vec2::new(100.0, 100.0))
        .expect("control");
    assert!(audio.has_context());
    let b = backend(&audio);
    assert_eq!(b.calls, vec![Call::Resume]);
}

#[test]
fn user_level_survives_a_mute_and_reselect() {
    let mut audio = engine();
    audio.select(AmbientType::Pink).expect("pink");
    audio
        .control(Vec2::new(0.0, 450.0), Vec2::new(800.0, 600.0))
        .expect("control");
    audio.stop();
    audio.select(AmbientType::White).expect("white");
    assert_eq!(audio.level(), 0.25);
    assert_eq!(backend(&audio).last_gain_target(), Some(0.25));
}

#[test]
fn connect_failure_is_reported_and_retried() {
    let attempts = Rc::new(Cell::new(0));
    let mut audio: AudioEngine<MockBackend> =
        AudioEngine::new(&test_config(), failing_connect(attempts.clone()));

    let err = audio.select(AmbientType::Brown).unwrap_err();
    assert!(matches!(err, AudioError::Context(_)));
    assert_eq!(audio.active(), AmbientType::Off);
    assert!(!audio.has_context());

    assert!(audio.gesture().is_err());
    assert_eq!(attempts.get(), 2);
}

#[test]
fn node_ids_are_unique() {
    let mut audio = engine();
    audio.select(AmbientType::Brown).expect("brown");
    let ids = [
        *audio.gain_node().expect("gain"),
        *audio.filter_node().expect("filter"),
        *audio.source_node().expect("source"),
    ];
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert!(ids.iter().all(|id| *id != NodeId(0)));
}
