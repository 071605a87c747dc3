//! Builds the lines of one post in the feed.
//!
//! Cards are flattened into pre-wrapped lines so the feed can measure them and
//! scroll by line.

use crate::constants::{COMMENT_PLACEHOLDER, COPIED_LABEL};
use crate::icons::IconService;
use crate::models::{Gradient, Post, PostContent};
use crate::post_view::{CopySlot, PostView};
use crate::ui::components::dialogs::common::CURSOR;
use crate::utils::color::{gradient_ramp, swatch_color};
use crate::utils::text::{pluralize, truncate, wrap_text};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::time::Instant;

/// Rows of the gradient bar drawn for palette posts
const GRADIENT_BAR_HEIGHT: usize = 3;
/// Palette slots reachable with the number keys
pub const MAX_COLOR_SLOTS: usize = 9;

/// Everything a card needs besides the post and its view
pub struct CardContext<'a> {
    pub icons: &'a IconService,
    pub width: u16,
    pub show_avatars: bool,
    pub show_timestamps: bool,
    pub selected: bool,
    pub commenting: bool,
    pub now: Instant,
}

pub fn post_card_lines(ctx: &CardContext, post: &Post, view: &PostView) -> Vec<Line<'static>> {
    let width = ctx.width.max(10) as usize;
    let mut lines = vec![header_line(ctx, &post.author.name, post.author.avatar_fallback(), &post.timestamp)];

    for line in wrap_text(&post.description, width) {
        lines.push(Line::from(Span::styled(line, Style::default().fg(Color::White))));
    }

    match &post.content {
        PostContent::Text => {}
        PostContent::Image { image_url } => lines.push(Line::from(vec![
            Span::styled(format!("{} ", ctx.icons.photo()), Style::default().fg(Color::Green)),
            Span::styled(
                describe_image_url(image_url, width.saturating_sub(6)),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ])),
        PostContent::Gradient(gradient) => {
            lines.extend(gradient_lines(ctx, gradient, view, width));
        }
    }

    lines.push(stats_line(ctx, post, view));

    if ctx.selected {
        lines.push(actions_line(ctx, post, view));
    }

    if view.comments_visible() {
        for comment in &post.comments {
            let mut spans = vec![Span::raw("  ")];
            if ctx.show_avatars {
                spans.push(Span::styled(
                    format!("({}) ", comment.avatar_fallback()),
                    Style::default().fg(Color::Cyan),
                ));
            }
            spans.push(Span::styled(
                comment.author.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            if ctx.show_timestamps {
                spans.push(Span::styled(
                    format!(" · {}", comment.timestamp),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans));
            for text in wrap_text(&comment.text, width.saturating_sub(4)) {
                lines.push(Line::from(Span::styled(format!("    {}", text), Style::default().fg(Color::Gray))));
            }
        }
        lines.push(comment_input_line(ctx, view));
    }

    lines.push(Line::from(""));
    lines
}

fn header_line(ctx: &CardContext, name: &str, initial: char, timestamp: &str) -> Line<'static> {
    let mut spans = Vec::new();
    if ctx.show_avatars {
        spans.push(Span::styled(format!("({}) ", initial), Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::styled(
        name.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    if ctx.show_timestamps {
        spans.push(Span::styled(format!(" · {}", timestamp), Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

/// Data URIs are far too long to show, so only their media type is printed
fn describe_image_url(url: &str, width: usize) -> String {
    match url.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split([';', ',']).next().unwrap_or("image");
            format!("attached {} ({} KiB encoded)", mime, url.len().div_ceil(1024))
        }
        None => truncate(url, width),
    }
}

fn gradient_lines(ctx: &CardContext, gradient: &Gradient, view: &PostView, width: usize) -> Vec<Line<'static>> {
    let ramp = gradient_ramp(&gradient.colors, width);
    let mut lines: Vec<Line<'static>> = (0..GRADIENT_BAR_HEIGHT)
        .map(|_| {
            Line::from(
                ramp.iter()
                    .map(|color| Span::styled("█", Style::default().fg(*color)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    lines.push(Line::from(vec![
        Span::styled(format!("{} ", ctx.icons.palette()), Style::default().fg(Color::Magenta)),
        Span::styled(
            gradient.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        ),
    ]));

    if !view.colors_visible() {
        return lines;
    }

    let copied = view.copied_slot(ctx.now);
    for (index, value) in gradient.colors.iter().take(MAX_COLOR_SLOTS).enumerate() {
        let slot = CopySlot::Color(index);
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", index + 1), Style::default().fg(Color::Yellow)),
            Span::styled("██ ", Style::default().fg(swatch_color(value))),
            slot_value_span(ctx, value, copied == Some(slot), width.saturating_sub(8)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("  y ", Style::default().fg(Color::Yellow)),
        Span::styled("CSS ", Style::default().fg(Color::DarkGray)),
        slot_value_span(ctx, &gradient.css, copied == Some(CopySlot::Css), width.saturating_sub(8)),
    ]));

    lines
}

fn slot_value_span(ctx: &CardContext, value: &str, copied: bool, width: usize) -> Span<'static> {
    if copied {
        Span::styled(
            format!("{} {}", ctx.icons.copy(true), COPIED_LABEL),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("{} {}", ctx.icons.copy(false), truncate(value, width)),
            Style::default().fg(Color::White),
        )
    }
}

fn stats_line(ctx: &CardContext, post: &Post, view: &PostView) -> Line<'static> {
    let like_style = if view.liked() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(
            format!("{} {}", ctx.icons.like(view.liked()), pluralize(view.like_count() as usize, "like")),
            like_style,
        ),
        Span::styled(
            format!("   {} {}", ctx.icons.comment(), pluralize(post.comments.len(), "comment")),
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn actions_line(ctx: &CardContext, post: &Post, view: &PostView) -> Line<'static> {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::DarkGray);
    let like_label = if view.liked() { " Unlike  " } else { " Like  " };
    let comments_label = if view.comments_visible() { " Hide comments  " } else { " Comments  " };

    let mut spans = vec![
        Span::styled("l", key),
        Span::styled(like_label, label),
        Span::styled("c", key),
        Span::styled(comments_label, label),
        Span::styled("r", key),
        Span::styled(" Reply  ", label),
        Span::styled(format!("{} Share", ctx.icons.share()), label),
    ];
    if post.gradient().is_some() {
        let colors_label = if view.colors_visible() { " Hide colors" } else { " Colors" };
        spans.push(Span::styled("  v", key));
        spans.push(Span::styled(colors_label, label));
    }
    if !ctx.commenting {
        spans.insert(0, Span::styled("▸ ", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn comment_input_line(ctx: &CardContext, view: &PostView) -> Line<'static> {
    let draft = view.comment_draft();
    let mut spans = vec![Span::styled("  > ", Style::default().fg(Color::Cyan))];
    if draft.is_empty() && !ctx.commenting {
        spans.push(Span::styled(COMMENT_PLACEHOLDER, Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::styled(draft.to_string(), Style::default().fg(Color::White)));
        if ctx.commenting {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::Gray)));
        }
    }
    Line::from(spans)
}
