use uuid::Uuid;

/// Source of fresh identifiers for menu items and add-ons.
pub trait IdProvider: Send {
    fn next_id(&mut self) -> Uuid;
}

/// Monotonic counter rendered as a UUID (`00000000-0000-0000-0000-000000000001`, ...).
///
/// Ids are deterministic and never repeat for the lifetime of the provider.
#[derive(Debug, Default)]
pub struct SequentialIdProvider {
    last: u128,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIdProvider {
    fn next_id(&mut self) -> Uuid {
        self.last += 1;
        Uuid::from_u128(self.last)
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Default)]
pub struct RandomIdProvider;

impl IdProvider for RandomIdProvider {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_count_up_from_one() {
        let mut ids = SequentialIdProvider::new();

        assert_eq!(ids.next_id(), Uuid::from_u128(1));
        assert_eq!(ids.next_id(), Uuid::from_u128(2));
        assert_eq!(
            ids.next_id().to_string(),
            "00000000-0000-0000-0000-000000000003"
        );
    }

    #[test]
    fn should_generate_distinct_random_ids() {
        let mut ids = RandomIdProvider;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
