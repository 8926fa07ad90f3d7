//! Section renderers shared by both site variants.
//!
//! Plain functions returning `Html`, assembled by `page`. Region order is
//! fixed: masthead, about panel, gallery strip, policy grid, closing
//! contact panel. Gallery and policy sections disappear entirely when
//! they have no entries.

use yew::prelude::*;

use crate::content::{GalleryEntry, PolicyEntry, SiteContent, SiteView};
use crate::icons;

/// The whole page for a ready view model.
pub fn page(view: &SiteView) -> Html {
    html! {
        <div class="page">
            { masthead(&view.content) }
            { about(&view.content) }
            { gallery(&view.gallery, &view.content.follow_handle()) }
            { policy_grid(&view.policies) }
            { contact(&view.content) }
        </div>
    }
}

/// Full-screen spinner shown while the first load attempt is in flight.
pub fn loading_view() -> Html {
    html! {
        <div class="page page-centered">
            <div class="status">
                <div class="spinner"></div>
                <p>{ "Loading..." }</p>
            </div>
        </div>
    }
}

/// Full-screen failure notice with a retry control.
pub fn failure_view(message: &str, on_retry: Callback<MouseEvent>) -> Html {
    html! {
        <div class="page page-centered">
            <div class="status">
                <p class="status-error">{ message.to_string() }</p>
                <button class="retry" onclick={on_retry}>{ "Retry" }</button>
            </div>
        </div>
    }
}

fn masthead(content: &SiteContent) -> Html {
    html! {
        <header class="masthead">
            <h1 class="brand">{ content.business_name.clone() }</h1>
            <div class="social-row">
                { social_link(icons::INSTAGRAM_PATH, content.instagram_href(), content.instagram_display()) }
                { social_link(icons::TIKTOK_PATH, content.tiktok_href(), content.tiktok_display()) }
            </div>
            <p class="tagline">{ content.tagline.clone() }</p>
        </header>
    }
}

fn about(content: &SiteContent) -> Html {
    // The circle falls back to the tech's name when no portrait is set.
    let portrait = match &content.profile_image {
        Some(image) if !image.url.is_empty() => {
            let alt = image.alt.clone().unwrap_or_else(|| "Profile".to_string());
            html! { <img class="portrait-photo" src={image.url.clone()} alt={alt} /> }
        }
        _ => html! { <span class="portrait-name">{ "Salma" }</span> },
    };

    html! {
        <section class="about">
            <div class="panel">
                { heading("MEET YOUR", "Nail Tech") }
                <div class="about-body">
                    <div class="portrait">
                        <div class="portrait-ring">{ portrait }</div>
                    </div>
                    <div class="about-text">
                        <p class="about-intro">{ content.intro_description.clone() }</p>
                        <p class="about-extra">{ content.additional_info.clone() }</p>
                    </div>
                </div>
                { contact_buttons(content) }
            </div>
        </section>
    }
}

fn gallery(entries: &[GalleryEntry], follow_handle: &str) -> Html {
    if entries.is_empty() {
        return html! {};
    }
    html! {
        <section class="gallery">
            <div class="section-head">
                { heading("MY", "Work") }
                <p class="section-note">{ "Swipe to see my latest nail designs" }</p>
            </div>
            <div class="gallery-scroller">
                <div class="gallery-strip">
                    { for entries.iter().map(gallery_card) }
                </div>
            </div>
            <p class="follow-note">
                { format!("Follow me on Instagram @{follow_handle} for more designs") }
            </p>
        </section>
    }
}

fn gallery_card(entry: &GalleryEntry) -> Html {
    let photo = match &entry.image {
        Some(image) if !image.url.is_empty() => {
            let alt = image.alt.clone().unwrap_or_else(|| entry.title.clone());
            html! { <img class="gallery-photo" src={image.url.clone()} alt={alt} /> }
        }
        _ => html! { <div class="gallery-photo gallery-photo-missing">{ "No photo yet" }</div> },
    };

    html! {
        <div class="gallery-card">
            { photo }
            <div class="gallery-caption">
                <h3>{ entry.title.clone() }</h3>
                <p>{ entry.description.clone() }</p>
            </div>
        </div>
    }
}

fn policy_grid(entries: &[PolicyEntry]) -> Html {
    if entries.is_empty() {
        return html! {};
    }
    html! {
        <section class="policies">
            <div class="panel">
                { heading("BOOKING", "Policies") }
                <div class="policy-grid">
                    { for entries.iter().map(policy_card) }
                </div>
            </div>
        </section>
    }
}

fn policy_card(entry: &PolicyEntry) -> Html {
    html! {
        <div class="policy-card">
            <div class="policy-badge">
                <svg class="policy-glyph" fill="currentColor" viewBox="0 0 24 24">
                    <path d={entry.icon.path_d()} />
                </svg>
            </div>
            <h3>{ entry.title.clone() }</h3>
            <p>{ entry.description.clone() }</p>
        </div>
    }
}

fn contact(content: &SiteContent) -> Html {
    html! {
        <section class="contact">
            <div class="panel">
                <h3>{ "Ready to Book?" }</h3>
                <p>{ "Contact me directly to schedule your appointment" }</p>
                { contact_buttons(content) }
            </div>
        </section>
    }
}

fn contact_buttons(content: &SiteContent) -> Html {
    html! {
        <div class="cta-row">
            <a class="cta cta-call" href={content.call_href()}>{ "Call Now" }</a>
            <a class="cta cta-whatsapp" href={content.whatsapp_href()} target="_blank" rel="noreferrer">
                { "WhatsApp" }
            </a>
            <a class="cta cta-instagram" href={content.instagram_href()} target="_blank" rel="noreferrer">
                { "Instagram DM" }
            </a>
        </div>
    }
}

/// Two-tone section heading: a plain serif lead plus a script flourish.
fn heading(lead: &str, script: &str) -> Html {
    html! {
        <div class="heading">
            <h2 class="heading-lead">{ lead.to_string() }</h2>
            <span class="heading-script">{ script.to_string() }</span>
        </div>
    }
}

fn social_link(glyph: &'static str, href: String, label: String) -> Html {
    html! {
        <div class="social">
            <svg class="social-glyph" fill="currentColor" viewBox="0 0 24 24">
                <path d={glyph} />
            </svg>
            <a href={href} target="_blank" rel="noreferrer">{ label }</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::PolicyIcon;

    fn entry(id: u32) -> GalleryEntry {
        GalleryEntry {
            id,
            title: format!("Design {id}"),
            description: "Test design".to_string(),
            image: None,
        }
    }

    #[test]
    fn empty_gallery_renders_nothing() {
        assert!(gallery(&[], "Nailsbysalma") == html! {});
        assert!(gallery(&[entry(1)], "Nailsbysalma") != html! {});
    }

    #[test]
    fn empty_policy_grid_renders_nothing() {
        assert!(policy_grid(&[]) == html! {});
        let one = PolicyEntry {
            id: 1,
            title: "PAYMENT".to_string(),
            description: "Deposit required.".to_string(),
            icon: PolicyIcon::Payment,
        };
        assert!(policy_grid(&[one]) != html! {});
    }

    #[test]
    fn page_always_renders_the_fixed_sections() {
        // Even a fully-default view keeps the masthead, about and contact
        // blocks; only the two list sections can disappear.
        assert!(page(&SiteView::default()) != html! {});
    }

    #[test]
    fn gallery_note_renders_the_follow_handle() {
        let entries = [entry(1)];
        assert!(gallery(&entries, "nailsbysalma") != gallery(&entries, "Nailsbysalma"));
    }
}
