use super::*;

// =============================================================
// Animated path
// =============================================================

#[test]
fn gate_starts_visible() {
    let gate = LoadingGate::new(false);
    assert_eq!(gate.phase(), LoadingPhase::Visible);
    assert!(gate.is_mounted());
    assert!(!gate.is_fading());
}

#[test]
fn animated_schedule_fades_before_unmount() {
    let gate = LoadingGate::new(false);
    let steps = gate.schedule();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0], GateStep { delay_ms: 1600, phase: LoadingPhase::FadingOut });
    assert_eq!(steps[1], GateStep { delay_ms: 2100, phase: LoadingPhase::Unmounted });
    assert!(steps[0].delay_ms < steps[1].delay_ms);
}

#[test]
fn animated_path_walks_every_phase() {
    let mut gate = LoadingGate::new(false);
    assert!(gate.advance(LoadingPhase::FadingOut));
    assert!(gate.is_fading());
    assert!(gate.is_mounted());
    assert!(gate.advance(LoadingPhase::Unmounted));
    assert!(!gate.is_mounted());
    assert_eq!(gate.next_transition(), None);
}

#[test]
fn animated_path_cannot_skip_fade() {
    let mut gate = LoadingGate::new(false);
    assert!(!gate.advance(LoadingPhase::Unmounted));
    assert_eq!(gate.phase(), LoadingPhase::Visible);
}

#[test]
fn phases_never_move_backwards() {
    let mut gate = LoadingGate::new(false);
    gate.advance(LoadingPhase::FadingOut);
    assert!(!gate.advance(LoadingPhase::Visible));
    assert!(!gate.advance(LoadingPhase::FadingOut));
    gate.advance(LoadingPhase::Unmounted);
    assert!(!gate.advance(LoadingPhase::FadingOut));
    assert_eq!(gate.phase(), LoadingPhase::Unmounted);
}

// =============================================================
// Reduced motion
// =============================================================

#[test]
fn reduced_motion_skips_fade() {
    let mut gate = LoadingGate::new(true);
    assert_eq!(gate.schedule(), [GateStep { delay_ms: 300, phase: LoadingPhase::Unmounted }]);
    assert!(!gate.advance(LoadingPhase::FadingOut));
    assert!(gate.advance(LoadingPhase::Unmounted));
    assert!(!gate.is_mounted());
}

#[test]
fn next_transition_tracks_phase() {
    let mut gate = LoadingGate::new(false);
    assert_eq!(gate.next_transition().map(|s| s.phase), Some(LoadingPhase::FadingOut));
    gate.advance(LoadingPhase::FadingOut);
    assert_eq!(gate.next_transition().map(|s| s.phase), Some(LoadingPhase::Unmounted));
}
