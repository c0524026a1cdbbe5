//! Reader and writer tests

#[cfg(test)]
mod io_tests {
    use std::io::Write;

    use chrono::Timelike;
    use tempfile::NamedTempFile;

    use crate::io::read_holdout_posts;
    use crate::io::read_training_posts;
    use crate::io::write_scored_posts;
    use crate::models::Post;
    use crate::models::PostKind;
    use crate::tests::make_post;

    /// Test helper to write a temp CSV file
    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    // ====== Reader ======

    #[test]
    fn test_read_training_row() {
        let file = write_temp(
            "Engagements,Followers at Posting,Created,Type,Description\n\
             150,2000,2019-07-01 14:23:05 EDT,Photo,Sunset at the lake #nofilter\n",
        );

        let posts = read_training_posts(file.path()).unwrap();
        assert_eq!(posts.len(), 1);

        let post = &posts[0];
        assert_eq!(post.engagements, 150);
        assert_eq!(post.followers, 2000);
        assert_eq!(post.created.hour(), 14);
        assert_eq!(post.time_zone, "EDT");
        assert_eq!(post.kind, PostKind::Photo);
        assert_eq!(post.description, "Sunset at the lake #nofilter");
        assert_eq!(post.estimated_engagements, None);
    }

    #[test]
    fn test_read_holdout_row_gets_placeholder() {
        let file = write_temp(
            "Followers at Posting,Created,Type,Description\n\
             2000,2019-07-01 14:23:05 EDT,Video,Clip of the day\n",
        );

        let posts = read_holdout_posts(file.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].engagements, Post::UNKNOWN_ENGAGEMENTS);
        assert_eq!(posts[0].followers, 2000);
        assert_eq!(posts[0].kind, PostKind::Video);
    }

    #[test]
    fn test_wrapped_description_is_repaired() {
        // The third physical line is the tail of the previous description
        let file = write_temp(
            "Engagements,Followers at Posting,Created,Type,Description\n\
             30,900,2019-07-03 09:15:00 EDT,Album,Start of caption\n\
             that wrapped onto a second line\n",
        );

        let posts = read_training_posts(file.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(
            posts[0].description,
            "Start of captionthat wrapped onto a second line"
        );
    }

    #[test]
    fn test_quoted_description_keeps_line_break() {
        let file = write_temp(
            "Engagements,Followers at Posting,Created,Type,Description\n\
             40,800,2019-07-04 08:00:00 EDT,Photo,\"Line one\nline two #tag\"\n",
        );

        let posts = read_training_posts(file.path()).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].description, "Line one\nline two #tag");
    }

    #[test]
    fn test_unquoted_commas_stay_in_description() {
        let file = write_temp(
            "Engagements,Followers at Posting,Created,Type,Description\n\
             40,800,2019-07-04 08:00:00 EDT,Photo,sun, sand, and surf\n",
        );

        let posts = read_training_posts(file.path()).unwrap();
        assert_eq!(posts[0].description, "sun, sand, and surf");
    }

    #[test]
    fn test_unrecognized_type_maps_to_unknown() {
        let file = write_temp(
            "Engagements,Followers at Posting,Created,Type,Description\n\
             40,800,2019-07-04 08:00:00 EDT,Reel,new format\n",
        );

        let posts = read_training_posts(file.path()).unwrap();
        assert_eq!(posts[0].kind, PostKind::Unknown);
    }

    #[test]
    fn test_continuation_before_any_post_is_an_error() {
        let file = write_temp(
            "Engagements,Followers at Posting,Created,Type,Description\n\
             stray line with no post before it\n",
        );

        assert!(read_training_posts(file.path()).is_err());
    }

    #[test]
    fn test_bad_timestamp_is_an_error() {
        let file = write_temp(
            "Engagements,Followers at Posting,Created,Type,Description\n\
             40,800,last tuesday,Photo,oops\n",
        );

        assert!(read_training_posts(file.path()).is_err());
    }

    // ====== Writer ======

    #[test]
    fn test_written_rows_are_zero_padded() {
        let mut post = make_post(0, 800, "2019-07-04 08:05:09", PostKind::Photo, "short caption");
        post.engagements = 123;

        let file = NamedTempFile::new().unwrap();
        write_scored_posts(file.path(), &[post]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Engagements,Followers at Posting,Created,Type,Description"
        );
        assert_eq!(
            lines.next().unwrap(),
            "123,800,2019-07-04 08:05:09 EDT,Photo,short caption"
        );
    }

    #[test]
    fn test_multiline_description_is_quoted() {
        let mut post = make_post(0, 800, "2019-07-04 08:00:00", PostKind::Video, "first\nsecond");
        post.engagements = 50;

        let file = NamedTempFile::new().unwrap();
        write_scored_posts(file.path(), &[post]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("50,800,2019-07-04 08:00:00 EDT,Video,\"first\nsecond\""));
    }

    #[test]
    fn test_single_line_description_is_not_quoted() {
        let mut post = make_post(0, 800, "2019-07-04 08:00:00", PostKind::Photo, "plain text");
        post.engagements = 10;

        let file = NamedTempFile::new().unwrap();
        write_scored_posts(file.path(), &[post]).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains(",Photo,plain text"));
        assert!(!content.contains('"'));
    }
}
