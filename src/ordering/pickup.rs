//! Pickup code generation.
//!
//! Codes are drawn uniformly from `100000..=999999` and checked against the
//! stored orders until a free one turns up. The check is only a pre-filter: two
//! concurrent creations can draw the same free code, and the repository's unique
//! index on pickup codes decides which insert wins. The loser regenerates (see
//! [`OrderService::create_order`](crate::ordering::OrderService::create_order)).

use crate::model::{PickupCode, PICKUP_CODE_RANGE};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Lookup of pickup codes held by stored orders.
#[async_trait]
pub trait PickupCodeIndex: Send + Sync {
    async fn is_taken(&self, code: &PickupCode) -> Result<bool, OrderError>;
}

/// Draws pickup codes that no stored order holds.
///
/// Cloning shares the random number generator.
#[derive(Clone)]
pub struct PickupCodeGenerator {
    rng: Arc<Mutex<fastrand::Rng>>,
    max_attempts: u32,
}

impl PickupCodeGenerator {
    /// Gives up after `max_attempts` taken candidates.
    pub fn new(max_attempts: u32) -> Self {
        Self::from_rng(fastrand::Rng::new(), max_attempts)
    }

    /// Deterministic sequence of candidates, for tests.
    pub fn with_seed(seed: u64, max_attempts: u32) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed), max_attempts)
    }

    fn from_rng(rng: fastrand::Rng, max_attempts: u32) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
            max_attempts,
        }
    }

    fn candidate(&self) -> Result<PickupCode, OrderError> {
        let number = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .u32(PICKUP_CODE_RANGE);
        PickupCode::from_number(number).map_err(|e| OrderError::InvalidArgument(e.to_string()))
    }

    /// A code not held by any order in `index` at the time of the check.
    ///
    /// Fails with [`OrderError::CapacityExhausted`] when every candidate drawn
    /// within the attempt limit was taken.
    pub async fn generate<I>(&self, index: &I) -> Result<PickupCode, OrderError>
    where
        I: PickupCodeIndex + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let code = self.candidate()?;
            if !index.is_taken(&code).await? {
                debug!(%code, attempt, "Pickup code assigned");
                return Ok(code);
            }
            debug!(%code, attempt, "Pickup code taken");
        }
        warn!(attempts = self.max_attempts, "No free pickup code");
        Err(OrderError::CapacityExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Every code is taken.
    struct Full;

    #[async_trait]
    impl PickupCodeIndex for Full {
        async fn is_taken(&self, _code: &PickupCode) -> Result<bool, OrderError> {
            Ok(true)
        }
    }

    /// Holds a fixed set of codes and counts lookups.
    struct Fixed {
        taken: HashSet<PickupCode>,
        lookups: Mutex<u32>,
    }

    #[async_trait]
    impl PickupCodeIndex for Fixed {
        async fn is_taken(&self, code: &PickupCode) -> Result<bool, OrderError> {
            *self.lookups.lock().unwrap() += 1;
            Ok(self.taken.contains(code))
        }
    }

    struct Broken;

    #[async_trait]
    impl PickupCodeIndex for Broken {
        async fn is_taken(&self, _code: &PickupCode) -> Result<bool, OrderError> {
            Err(OrderError::ActorCommunicationError("Actor closed".into()))
        }
    }

    #[tokio::test]
    async fn codes_are_six_digit_numbers() {
        let generator = PickupCodeGenerator::new(8);
        let index = Fixed {
            taken: HashSet::new(),
            lookups: Mutex::new(0),
        };
        for _ in 0..200 {
            let code = generator.generate(&index).await.unwrap();
            assert_eq!(code.as_str().len(), 6);
            let number: u32 = code.as_str().parse().unwrap();
            assert!(PICKUP_CODE_RANGE.contains(&number));
        }
    }

    #[tokio::test]
    async fn taken_codes_are_skipped() {
        // Same seed, so the first candidate of `generator` is `first`.
        let first = PickupCodeGenerator::with_seed(7, 1)
            .candidate()
            .unwrap();
        let generator = PickupCodeGenerator::with_seed(7, 5);
        let index = Fixed {
            taken: HashSet::from([first.clone()]),
            lookups: Mutex::new(0),
        };

        let code = generator.generate(&index).await.unwrap();
        assert_ne!(code, first);
        assert_eq!(*index.lookups.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn full_index_exhausts_capacity() {
        let generator = PickupCodeGenerator::new(4);
        let result = generator.generate(&Full).await;
        assert_eq!(result, Err(OrderError::CapacityExhausted { attempts: 4 }));
    }

    #[tokio::test]
    async fn index_failures_are_not_retried() {
        let generator = PickupCodeGenerator::new(4);
        let result = generator.generate(&Broken).await;
        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    }
}
