//! Social link component

use maud::{Markup, html};

use crate::render::{SocialContent, SocialLink};

pub fn social_link(link: &SocialLink) -> Markup {
    html! {
        a href=(link.href) target="_blank" rel="noopener" {
            @match &link.content {
                SocialContent::Image { src, alt } => { img src=(src) alt=(alt); },
                SocialContent::Text(text) => { (text) },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_text_fallback() {
        // Arrange
        let link = SocialLink {
            href: "https://x.com/jane".to_string(),
            content: SocialContent::Text("social".to_string()),
        };

        // Act
        let html = social_link(&link).into_string();

        // Assert
        assert_eq!(
            html,
            r#"<a href="https://x.com/jane" target="_blank" rel="noopener">social</a>"#
        );
    }

    #[test]
    fn test_social_icon() {
        // Arrange
        let link = SocialLink {
            href: "https://github.com/jane".to_string(),
            content: SocialContent::Image {
                src: "gh.svg".to_string(),
                alt: "GitHub".to_string(),
            },
        };

        // Act
        let html = social_link(&link).into_string();

        // Assert
        assert!(html.contains(r#"<img src="gh.svg" alt="GitHub">"#));
    }
}
