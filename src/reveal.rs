//! One-shot visibility latch.
//!
//! A region starts hidden and flips to visible the first time the host
//! reports it intersecting the viewport by at least the configured
//! fraction of its area. After that the observation is closed: the host
//! subscription is disconnected and later notifications are dropped.
//!
//! Nothing in here touches the browser. The Yew hook in `hooks.rs` wires
//! an `IntersectionObserver` to an [`Observation`].

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThresholdError {
    #[error("threshold {0} is outside 0.0..=1.0")]
    OutOfRange(f64),
}

/// Fraction of a region's area that must be inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(ThresholdError::OutOfRange(value));
        }
        Ok(Threshold(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single intersection notification as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    fn qualifies(&self, threshold: Threshold) -> bool {
        self.is_intersecting && self.ratio >= threshold.value()
    }
}

/// Outcome of feeding an event into a one-shot state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// This event flipped the latch.
    Latched,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    threshold: Threshold,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(threshold: Threshold) -> Self {
        RevealLatch {
            threshold,
            state: RevealState::Hidden,
        }
    }

    pub fn observe(&mut self, sample: IntersectionSample) -> Transition {
        match self.state {
            RevealState::Visible => Transition::Unchanged,
            RevealState::Hidden if sample.qualifies(self.threshold) => {
                self.state = RevealState::Visible;
                Transition::Latched
            }
            RevealState::Hidden => Transition::Unchanged,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }
}

/// The host side of a subscription, e.g. a browser `IntersectionObserver`.
pub trait ObserverHandle {
    fn disconnect(&self);
}

/// What happened to a delivered sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Revealed,
    Pending,
    /// The observation was already closed; the sample was dropped.
    Ignored,
}

/// A latch bound to a live host subscription.
///
/// The handle is disconnected exactly once: on the first qualifying
/// sample, or on [`Observation::cancel`], whichever comes first.
pub struct Observation<H: ObserverHandle> {
    latch: RevealLatch,
    handle: Option<H>,
}

impl<H: ObserverHandle> Observation<H> {
    pub fn new(threshold: Threshold, handle: H) -> Self {
        Observation {
            latch: RevealLatch::new(threshold),
            handle: Some(handle),
        }
    }

    pub fn deliver(&mut self, sample: IntersectionSample) -> Delivery {
        if self.handle.is_none() {
            return Delivery::Ignored;
        }
        match self.latch.observe(sample) {
            Transition::Latched => {
                self.close();
                Delivery::Revealed
            }
            Transition::Unchanged => Delivery::Pending,
        }
    }

    /// Tear down before the region ever became visible.
    pub fn cancel(&mut self) {
        self.close();
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    // A region with `ratio` of its area on screen.
    fn at(ratio: f64) -> IntersectionSample {
        IntersectionSample {
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    #[derive(Clone, Default)]
    struct FakeHandle {
        disconnects: Rc<Cell<u32>>,
    }

    impl ObserverHandle for FakeHandle {
        fn disconnect(&self) {
            self.disconnects.set(self.disconnects.get() + 1);
        }
    }

    /// Stands in for the browser: keeps registrations until they disconnect
    /// and only notifies the ones still connected.
    #[derive(Default)]
    struct FakeHost {
        registered: Vec<(FakeHandle, Rc<RefCell<Observation<FakeHandle>>>)>,
        callbacks: Cell<u32>,
    }

    impl FakeHost {
        fn observe(&mut self, threshold: Threshold) -> Rc<RefCell<Observation<FakeHandle>>> {
            let handle = FakeHandle::default();
            let observation = Rc::new(RefCell::new(Observation::new(threshold, handle.clone())));
            self.registered.push((handle, observation.clone()));
            observation
        }

        fn live(&self) -> usize {
            self.registered
                .iter()
                .filter(|(h, _)| h.disconnects.get() == 0)
                .count()
        }

        fn notify(&self, ratio: f64) {
            for (handle, observation) in &self.registered {
                if handle.disconnects.get() == 0 {
                    self.callbacks.set(self.callbacks.get() + 1);
                    observation.borrow_mut().deliver(at(ratio));
                }
            }
        }
    }

    #[test]
    fn default_threshold_is_ten_percent() {
        assert_eq!(Threshold::default().value(), 0.1);
    }

    #[test]
    fn threshold_rejects_out_of_range() {
        assert_eq!(Threshold::new(1.5), Err(ThresholdError::OutOfRange(1.5)));
        assert_eq!(Threshold::new(-0.1), Err(ThresholdError::OutOfRange(-0.1)));
        assert!(Threshold::new(f64::NAN).is_err());
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
    }

    #[test]
    fn latch_scenario_below_then_above_then_gone() {
        let mut latch = RevealLatch::new(Threshold::default());

        assert_eq!(latch.observe(at(0.05)), Transition::Unchanged);
        assert!(!latch.is_visible());

        assert_eq!(latch.observe(at(0.12)), Transition::Latched);
        assert!(latch.is_visible());

        assert_eq!(latch.observe(at(0.0)), Transition::Unchanged);
        assert!(latch.is_visible());
    }

    #[test]
    fn zero_threshold_still_needs_an_intersecting_sample() {
        let mut latch = RevealLatch::new(Threshold::new(0.0).unwrap());
        let sample = IntersectionSample {
            ratio: 0.0,
            is_intersecting: false,
        };
        assert_eq!(latch.observe(sample), Transition::Unchanged);
        assert!(!latch.is_visible());

        let touching = IntersectionSample {
            ratio: 0.0,
            is_intersecting: true,
        };
        assert_eq!(latch.observe(touching), Transition::Latched);
    }

    #[test]
    fn region_off_screen_stays_hidden() {
        let mut host = FakeHost::default();
        let observation = host.observe(Threshold::default());
        for _ in 0..50 {
            host.notify(0.0);
        }
        assert!(!observation.borrow().is_visible());
        assert!(observation.borrow().is_open());
        assert_eq!(host.live(), 1);
    }

    #[test]
    fn reveal_disconnects_and_drops_later_notifications() {
        let mut host = FakeHost::default();
        let observation = host.observe(Threshold::default());

        host.notify(0.5);
        assert!(observation.borrow().is_visible());
        assert!(!observation.borrow().is_open());
        assert_eq!(host.registered[0].0.disconnects.get(), 1);

        host.notify(0.0);
        host.notify(0.9);
        assert_eq!(host.callbacks.get(), 1);
        assert!(observation.borrow().is_visible());
        assert_eq!(host.live(), 0);
    }

    #[test]
    fn late_delivery_after_reveal_is_ignored() {
        let handle = FakeHandle::default();
        let mut observation = Observation::new(Threshold::default(), handle.clone());

        assert_eq!(observation.deliver(at(0.3)), Delivery::Revealed);
        assert_eq!(observation.deliver(at(0.3)), Delivery::Ignored);
        observation.cancel();
        assert_eq!(handle.disconnects.get(), 1);
    }

    #[test]
    fn cancel_before_reveal_leaves_nothing_registered() {
        let mut host = FakeHost::default();
        let observation = host.observe(Threshold::default());

        host.notify(0.02);
        assert_eq!(host.callbacks.get(), 1);

        observation.borrow_mut().cancel();
        assert_eq!(host.live(), 0);

        host.notify(1.0);
        assert_eq!(host.callbacks.get(), 1);
        assert!(!observation.borrow().is_visible());
        assert_eq!(
            observation.borrow_mut().deliver(at(1.0)),
            Delivery::Ignored
        );
    }

    #[test]
    fn regions_latch_independently() {
        let mut host = FakeHost::default();
        let near = host.observe(Threshold::new(0.1).unwrap());
        let strict = host.observe(Threshold::new(0.8).unwrap());

        host.notify(0.4);
        assert!(near.borrow().is_visible());
        assert!(!strict.borrow().is_visible());
        assert_eq!(host.live(), 1);

        host.notify(0.85);
        assert!(strict.borrow().is_visible());
        assert_eq!(host.live(), 0);
    }

    proptest! {
        #[test]
        fn latch_is_monotonic(
            threshold in 0.0f64..=1.0,
            ratios in proptest::collection::vec(0.0f64..=1.0, 0..40)
        ) {
            let threshold = Threshold::new(threshold).unwrap();
            let mut latch = RevealLatch::new(threshold);
            let mut seen_qualifying = false;
            let mut transitions = 0;

            for ratio in ratios {
                let sample = at(ratio);
                seen_qualifying |= sample.is_intersecting && ratio >= threshold.value();
                if latch.observe(sample) == Transition::Latched {
                    transitions += 1;
                }
                prop_assert_eq!(latch.is_visible(), seen_qualifying);
            }
            prop_assert!(transitions <= 1);
        }
    }
}
