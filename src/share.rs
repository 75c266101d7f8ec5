//! Outbound share links.
//!
//! Every target is a fixed external endpoint parameterized with the episode's
//! title, canonical page URL and (for Pinterest) cover image. The app only
//! constructs these URLs; opening them is an effect handled by the runtime.

use crate::catalog::Episode;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

pub struct ShareTarget {
    pub label: &'static str,
    pub url: String,
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

pub fn share_title(episode: &Episode, podcast_name: &str) -> String {
    format!("{} - {}", episode.title, podcast_name)
}

/// All share endpoints for one episode, in display order.
pub fn share_targets(episode: &Episode, podcast_name: &str) -> Vec<ShareTarget> {
    let url = &episode.links.page;
    let title = share_title(episode, podcast_name);
    vec![
        ShareTarget {
            label: "Facebook",
            url: format!(
                "https://www.facebook.com/sharer/sharer.php?u={}",
                encode(url)
            ),
        },
        ShareTarget {
            label: "Twitter",
            url: format!(
                "https://twitter.com/intent/tweet?url={}&text={}",
                encode(url),
                encode(&title)
            ),
        },
        ShareTarget {
            label: "LinkedIn",
            url: format!(
                "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
                encode(url),
                encode(&title)
            ),
        },
        ShareTarget {
            label: "WhatsApp",
            url: format!(
                "https://api.whatsapp.com/send?text={}",
                encode(&format!("{title} {url}"))
            ),
        },
        ShareTarget {
            label: "Reddit",
            url: format!(
                "https://www.reddit.com/submit?url={}&title={}",
                encode(url),
                encode(&title)
            ),
        },
        ShareTarget {
            label: "Pinterest",
            url: format!(
                "https://pinterest.com/pin/create/button/?url={}&media={}&description={}",
                encode(url),
                encode(&episode.image_url),
                encode(&title)
            ),
        },
        ShareTarget {
            label: "Bluesky",
            url: format!(
                "https://bsky.app/intent/compose?text={}",
                encode(&format!("{title} {url}"))
            ),
        },
        ShareTarget {
            label: "Email",
            url: format!(
                "mailto:?subject={}&body={}",
                encode(&title),
                encode(url)
            ),
        },
    ]
}

/// Plain-text digest of the saved collection, newest save first, used for
/// both the mailto draft and the clipboard copy.
pub fn selection_digest(episodes: &[&Episode], podcast_name: &str) -> String {
    let list = episodes
        .iter()
        .map(|episode| format!("- {}\n  {}", episode.title, episode.links.page))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "Hello,\n\nEpisodes of {podcast_name} saved for later:\n\n{list}\n\nEnjoy listening!"
    )
}

pub fn selection_mailto(digest: &str, podcast_name: &str) -> String {
    let subject = format!("{podcast_name} episodes to listen to later");
    format!("mailto:?subject={}&body={}", encode(&subject), encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::episode;

    #[test]
    fn encodes_title_and_url() {
        let ep = episode(3, "2024-02-02");
        let targets = share_targets(&ep, "Soluble(s)");
        let twitter = targets.iter().find(|t| t.label == "Twitter").unwrap();
        assert!(twitter.url.contains("url=https%3A%2F%2Fpodcast%2Eexample%2Fepisodes%2F3"));
        assert!(twitter.url.contains("Soluble%28s%29"));
        assert!(!twitter.url.contains(' '));
    }

    #[test]
    fn pinterest_carries_the_cover_image() {
        let ep = episode(9, "2024-02-02");
        let targets = share_targets(&ep, "Soluble(s)");
        let pinterest = targets.iter().find(|t| t.label == "Pinterest").unwrap();
        assert!(pinterest.url.contains("media=https%3A%2F%2Fpodcast%2Eexample%2Fcovers%2F9%2Ejpg"));
    }

    #[test]
    fn digest_lists_every_episode_with_its_page() {
        let a = episode(1, "2024-01-01");
        let b = episode(2, "2024-01-02");
        let digest = selection_digest(&[&b, &a], "Soluble(s)");
        assert!(digest.contains("- Episode 2\n  https://podcast.example/episodes/2"));
        assert!(digest.contains("- Episode 1\n  https://podcast.example/episodes/1"));

        let mailto = selection_mailto(&digest, "Soluble(s)");
        assert!(mailto.starts_with("mailto:?subject="));
        assert!(mailto.contains("&body="));
    }
}
