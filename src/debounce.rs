//! Trailing-edge debounce bookkeeping and request sequencing.
//!
//! Both types are timer-agnostic: the UI owns the actual `Timeout`s and asks
//! these types whether a fired timer or a finished request is still current.

/// Holds the latest scheduled value; only the newest ticket may claim it.
#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    /// Replace any pending value and return the ticket for this schedule.
    pub fn schedule(&mut self, value: T) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(value);
        self.generation
    }

    /// Claim the pending value if `ticket` is the newest schedule.
    pub fn fire(&mut self, ticket: u64) -> Option<T> {
        if ticket == self.generation {
            self.pending.take()
        } else {
            None
        }
    }
}

/// Monotonic request counter used to drop responses that arrive after a
/// newer request was issued.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Invalidate everything in flight without issuing a request.
    pub fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }

    pub fn is_current(&self, id: u64) -> bool {
        id == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_schedules_fire_once_with_last_value() {
        let mut debouncer = Debouncer::default();
        let tickets: Vec<u64> = ["1", "1.", "1.2", "1.25"]
            .iter()
            .map(|v| debouncer.schedule(v.to_string()))
            .collect();

        let fired: Vec<String> = tickets
            .iter()
            .filter_map(|ticket| debouncer.fire(*ticket))
            .collect();
        assert_eq!(fired, vec!["1.25".to_string()]);
    }

    #[test]
    fn ticket_fires_only_once() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule(7);
        assert_eq!(debouncer.fire(ticket), Some(7));
        assert_eq!(debouncer.fire(ticket), None);
    }

    #[test]
    fn late_response_is_rejected() {
        let mut sequence = RequestSequence::default();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));

        sequence.invalidate();
        assert!(!sequence.is_current(second));
    }
}
