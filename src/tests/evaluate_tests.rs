//! MAPE evaluation tests

#[cfg(test)]
mod evaluate_tests {
    use crate::evaluate::mape;
    use crate::models::PostKind;
    use crate::tests::make_post;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_perfect_predictions_give_zero_mape() {
        let mut posts = vec![
            make_post(100, 1000, "2019-07-01 10:00:00", PostKind::Photo, ""),
            make_post(250, 1000, "2019-07-02 11:00:00", PostKind::Video, ""),
        ];
        for post in &mut posts {
            post.estimated_engagements = Some(post.engagements);
        }

        let result = mape(&posts).unwrap();
        assert!(result.abs() < TOLERANCE);
    }

    #[test]
    fn test_mape_averages_absolute_percentage_errors() {
        let mut first = make_post(100, 1000, "2019-07-01 10:00:00", PostKind::Photo, "");
        first.estimated_engagements = Some(90); // off by 10%

        let mut second = make_post(100, 1000, "2019-07-02 10:00:00", PostKind::Photo, "");
        second.estimated_engagements = Some(130); // off by 30%

        let result = mape(&[first, second]).unwrap();
        assert!((result - 20.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_overestimates_count_as_absolute_error() {
        let mut post = make_post(100, 1000, "2019-07-01 10:00:00", PostKind::Photo, "");
        post.estimated_engagements = Some(150);

        let result = mape(&[post]).unwrap();
        assert!((result - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_engagement_posts_are_excluded() {
        let mut zero = make_post(0, 1000, "2019-07-01 10:00:00", PostKind::Photo, "");
        zero.estimated_engagements = Some(50);

        let mut valid = make_post(100, 1000, "2019-07-02 10:00:00", PostKind::Photo, "");
        valid.estimated_engagements = Some(90);

        let result = mape(&[zero, valid]).unwrap();
        assert!((result - 10.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_posts_without_estimates_are_ignored() {
        let unestimated = make_post(100, 1000, "2019-07-01 10:00:00", PostKind::Photo, "");
        assert_eq!(mape(&[unestimated]), None);
    }

    #[test]
    fn test_empty_set_has_no_mape() {
        assert_eq!(mape(&[]), None);
    }
}
