//! Posts shown on first start when no seed file is configured.

use crate::models::{Author, Comment, CommentId, Gradient, Post, PostContent, PostId};

fn colors(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId(3),
            content: PostContent::Image {
                image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=600&fit=crop"
                    .to_string(),
            },
            description: "Just created this dreamy purple gradient! Perfect for creative projects 🎨".to_string(),
            author: Author::new(
                "Sarah Chen",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop",
            ),
            timestamp: "2 hours ago".to_string(),
            likes: 234,
            comments: vec![
                Comment {
                    id: CommentId(1),
                    author: "Mike Johnson".to_string(),
                    avatar: "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=150&h=150&fit=crop"
                        .to_string(),
                    text: "This is gorgeous! Mind if I use it in my next project?".to_string(),
                    timestamp: "1 hour ago".to_string(),
                },
                Comment {
                    id: CommentId(2),
                    author: "Emma Wilson".to_string(),
                    avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop"
                        .to_string(),
                    text: "Love the color combination! 💜".to_string(),
                    timestamp: "45 minutes ago".to_string(),
                },
            ],
        },
        Post {
            id: PostId(2),
            content: PostContent::Gradient(Gradient::linear(
                "Purple Haze",
                colors(&["#667eea", "#764ba2", "#f093fb"]),
            )),
            description: "Tap the gradient to grab the palette 💜".to_string(),
            author: Author::new(
                "Sarah Chen",
                "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop",
            ),
            timestamp: "3 hours ago".to_string(),
            likes: 87,
            comments: Vec::new(),
        },
        Post {
            id: PostId(1),
            content: PostContent::Gradient(Gradient::linear(
                "Ocean Breeze",
                colors(&["#2E3192", "#1BFFFF"]),
            )),
            description: "Cool blues for a calm landing page.".to_string(),
            author: Author::new(
                "Mike Johnson",
                "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=150&h=150&fit=crop",
            ),
            timestamp: "Yesterday".to_string(),
            likes: 12,
            comments: vec![Comment {
                id: CommentId(1),
                author: "Emma Wilson".to_string(),
                avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop"
                    .to_string(),
                text: "Saving this one.".to_string(),
                timestamp: "20 hours ago".to_string(),
            }],
        },
    ]
}
