#[cfg(test)]
mod model_tests {
    use super::super::record::{NewRecordInput, Record};
    use chrono::Utc;

    fn input(max_views: Option<u64>) -> NewRecordInput {
        NewRecordInput {
            content: "Hello, World!".to_string(),
            expires_at: None,
            max_views,
        }
    }

    #[test]
    fn test_record_new_starts_unviewed() {
        let now = Utc::now();
        let record = Record::new("abc123XYZ_".to_string(), input(Some(5)), now);

        assert_eq!(record.id, "abc123XYZ_");
        assert_eq!(record.content, "Hello, World!");
        assert_eq!(record.created_at, now);
        assert_eq!(record.view_count, 0);
        assert_eq!(record.max_views, Some(5));
        assert!(record.expires_at.is_none());
    }

    #[test]
    fn test_remaining_views_counts_down() {
        let mut record = Record::new("id".to_string(), input(Some(3)), Utc::now());
        assert_eq!(record.remaining_views(), Some(3));

        record.view_count = 1;
        assert_eq!(record.remaining_views(), Some(2));

        record.view_count = 3;
        assert_eq!(record.remaining_views(), Some(0));
    }

    #[test]
    fn test_remaining_views_floors_at_zero() {
        let mut record = Record::new("id".to_string(), input(Some(2)), Utc::now());
        record.view_count = 5;
        assert_eq!(record.remaining_views(), Some(0));
    }

    #[test]
    fn test_remaining_views_unlimited_is_none() {
        let mut record = Record::new("id".to_string(), input(None), Utc::now());
        record.view_count = 100;
        assert_eq!(record.remaining_views(), None);
    }
}
