use serde::{Deserialize, Serialize};

/// Order - a purchase record associated with exactly one client
///
/// Orders carry a date and a monetary amount and form a many-to-one
/// relationship to [`super::Client`] via `client_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier. `None` when the store assigns one at insert time.
    pub order_id: Option<i64>,

    /// Owning client identifier. Must reference an existing client when
    /// foreign-key enforcement is active.
    pub client_id: i64,

    /// Order date as opaque `YYYY-MM-DD` text. Date-range filtering relies
    /// on lexicographic ordering of this format.
    pub order_date: String,

    /// Order amount
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_round_trips_through_serde() {
        let order = Order {
            order_id: Some(3),
            client_id: 61,
            order_date: "2023-05-17".to_string(),
            amount: 75.5,
        };

        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, back);
    }
}
