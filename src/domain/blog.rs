use crate::domain::model::BlogPost;
use chrono::NaiveDate;

const WORDS_PER_MINUTE: usize = 200;

pub fn find_by_id(posts: &[BlogPost], id: i64) -> Option<&BlogPost> {
    posts.iter().find(|post| post.id == id)
}

/// Posts adjacent to `id` in list order, as `(previous, next)`.
pub fn neighbors(posts: &[BlogPost], id: i64) -> (Option<&BlogPost>, Option<&BlogPost>) {
    let Some(index) = posts.iter().position(|post| post.id == id) else {
        return (None, None);
    };

    let previous = index.checked_sub(1).and_then(|i| posts.get(i));
    (previous, posts.get(index + 1))
}

pub fn estimate_read_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

pub fn created_date(post: &BlogPost) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(post.created_at.trim(), "%Y-%m-%d").ok()
}

/// Most recent first; undated posts keep their order at the end.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by_key(|post| std::cmp::Reverse(created_date(post)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fallback;

    #[test]
    fn test_neighbors_follow_list_position() {
        let posts = fallback::blog_posts();

        let (prev, next) = neighbors(&posts, 1);
        assert!(prev.is_none());
        assert_eq!(next.map(|p| p.id), Some(2));

        let (prev, next) = neighbors(&posts, 6);
        assert_eq!(prev.map(|p| p.id), Some(5));
        assert!(next.is_none());

        assert_eq!(neighbors(&posts, 99), (None, None));
    }

    #[test]
    fn test_estimate_read_minutes() {
        assert_eq!(estimate_read_minutes(""), 1);
        assert_eq!(estimate_read_minutes("one two three"), 1);
        assert_eq!(estimate_read_minutes(&"word ".repeat(200)), 1);
        assert_eq!(estimate_read_minutes(&"word ".repeat(201)), 2);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut posts = fallback::blog_posts();
        posts.reverse();
        posts[0].created_at = "someday".to_string();
        sort_newest_first(&mut posts);

        assert_eq!(posts[0].id, 1);
        assert_eq!(posts.last().map(|p| p.created_at.as_str()), Some("someday"));
    }

    #[test]
    fn test_find_by_id() {
        let posts = fallback::blog_posts();
        assert_eq!(
            find_by_id(&posts, 3).map(|p| p.title.as_str()),
            Some("Docker for Java Developers")
        );
        assert!(find_by_id(&posts, 0).is_none());
    }
}
