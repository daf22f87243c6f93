use crate::policies::BufferPolicy;

/// Policy of the plain event broadcaster: nothing is retained or replayed.
///
/// A late observer sees only values emitted after it subscribed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoReplay;

impl<T> BufferPolicy<T> for NoReplay {
    #[inline]
    fn record(&mut self, _value: &T) {}

    #[inline]
    fn replay(&mut self) -> Vec<T> {
        Vec::new()
    }

    #[inline]
    fn retained(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_nothing() {
        let mut policy = NoReplay;
        BufferPolicy::<u8>::record(&mut policy, &1);
        BufferPolicy::<u8>::record(&mut policy, &2);
        assert_eq!(BufferPolicy::<u8>::retained(&policy), 0);
        assert!(BufferPolicy::<u8>::replay(&mut policy).is_empty());
    }
}
