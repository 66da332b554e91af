//! The home feed of user posts.
//!
//! Posts are sample data, fixed at startup. Whether the viewer has liked a
//! post is view state: a [`Feed`] pairs the posts with the viewer's likes
//! and reports the count to display.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::domain::Rating;

/// Identifier of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PostId(pub u32);

/// A post about an activity someone went to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub user_image: String,
    pub username: String,
    pub activity_title: String,
    pub caption: String,
    pub image: String,
    /// Likes from everyone other than the viewer
    pub likes: u32,
    pub shares: u32,
    pub rating: Rating,
    /// Relative time label, e.g. "2 hours ago"
    pub posted: String,
}

/// Posts together with the ones the viewer has liked.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    posts: Vec<Post>,
    liked: BTreeSet<PostId>,
}

impl Feed {
    /// A feed with nothing liked yet.
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            liked: BTreeSet::new(),
        }
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Returns true if the viewer has liked the post.
    pub fn is_liked(&self, id: PostId) -> bool {
        self.liked.contains(&id)
    }

    /// Like the post, or unlike it if already liked.
    ///
    /// Returns the new liked state, or `None` for an unknown post.
    pub fn toggle_like(&mut self, id: PostId) -> Option<bool> {
        self.post(id)?;
        let liked = if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        };
        debug!(post = id.0, liked, "Like toggled");
        Some(liked)
    }

    /// Like count to show for a post, counting the viewer's own like.
    pub fn displayed_likes(&self, post: &Post) -> u32 {
        post.likes.saturating_add(u32::from(self.is_liked(post.id)))
    }
}

/// Posts shown on the home screen.
pub fn sample_posts() -> Vec<Post> {
    let rows = [
        (
            "user1",
            "Sarah Chen",
            "Beach Volleyball Tournament",
            "Perfect weather for our weekend tournament! Join us next time for some fun in the sun! #BeachVolleyball #WeekendFun",
            "beach-volleyball-post",
            124,
            18,
            4.5,
            "2 hours ago",
        ),
        (
            "user2",
            "Mike Rodriguez",
            "Mountain Trail Adventure",
            "Epic hiking day at Mount Rainier! The views were absolutely breathtaking #Hiking #Nature",
            "hiking-trail-post",
            89,
            12,
            5.0,
            "5 hours ago",
        ),
        (
            "user3",
            "Emma Wilson",
            "Sunset Yoga Session",
            "Finding peace at our beachside yoga session #YogaLife #SunsetVibes",
            "sunset-yoga-post",
            156,
            23,
            4.8,
            "7 hours ago",
        ),
        (
            "user4",
            "Alex Thompson",
            "Rock Climbing Workshop",
            "First time climbing outdoors! Amazing experience with great instructors #RockClimbing",
            "rock-climbing-post",
            92,
            15,
            4.7,
            "1 day ago",
        ),
    ];

    rows.into_iter()
        .zip(1..)
        .map(
            |((user_image, username, activity_title, caption, image, likes, shares, rating, posted), id)| Post {
                id: PostId(id),
                user_image: user_image.to_string(),
                username: username.to_string(),
                activity_title: activity_title.to_string(),
                caption: caption.to_string(),
                image: image.to_string(),
                likes,
                shares,
                rating: Rating::new(rating).expect("sample ratings are valid"),
                posted: posted.to_string(),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_feed() {
        let posts = sample_posts();
        assert_eq!(posts.len(), 4);
        assert_eq!(posts[0].username, "Sarah Chen");
        assert_eq!(posts[1].rating.filled_stars(), 5);
        assert_eq!(posts[3].id, PostId(4));
    }

    #[test]
    fn like_adds_one_to_displayed_count() {
        let mut feed = Feed::new(sample_posts());
        let id = PostId(1);

        assert_eq!(feed.toggle_like(id), Some(true));
        let post = feed.post(id).unwrap();
        assert_eq!(feed.displayed_likes(post), 125);
        assert_eq!(post.likes, 124);
    }

    #[test]
    fn second_toggle_unlikes() {
        let mut feed = Feed::new(sample_posts());
        let id = PostId(2);

        feed.toggle_like(id);
        assert_eq!(feed.toggle_like(id), Some(false));
        assert!(!feed.is_liked(id));
        assert_eq!(feed.displayed_likes(feed.post(id).unwrap()), 89);
    }

    #[test]
    fn likes_are_per_post() {
        let mut feed = Feed::new(sample_posts());
        feed.toggle_like(PostId(3));

        assert!(feed.is_liked(PostId(3)));
        assert!(!feed.is_liked(PostId(4)));
        assert_eq!(feed.displayed_likes(feed.post(PostId(4)).unwrap()), 92);
    }

    #[test]
    fn unknown_post_cannot_be_liked() {
        let mut feed = Feed::new(sample_posts());
        assert_eq!(feed.toggle_like(PostId(99)), None);
        assert!(!feed.is_liked(PostId(99)));
    }
}
