//! Display-ready content model. Everything here is built once per page load
//! (from hardcoded data or from the CMS) and read-only afterwards.

use crate::icons::PolicyIcon;

const DEFAULT_PHONE: &str = "+254794548718";
const DEFAULT_WHATSAPP: &str = "254794548718";
const DEFAULT_HANDLE: &str = "Nailsbysalma";
const FOLLOW_HANDLE: &str = "nailsbysalma";

/// An image ready for display. `url` is already absolute; an empty `url`
/// means the rendering layer should show a placeholder instead.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteImage {
    pub url: String,
    pub alt: Option<String>,
}

/// Business identity and contact data for the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub business_name: String,
    pub tagline: String,
    pub intro_title: String,
    pub intro_description: String,
    pub additional_info: String,
    pub instagram_handle: String,
    pub tiktok_handle: String,
    pub phone_number: String,
    pub whatsapp_number: String,
    pub profile_image: Option<SiteImage>,
}

/// One showcased work sample. Entries keep the order they were delivered in.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: Option<SiteImage>,
}

/// One booking-policy card.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: PolicyIcon,
}

/// The single view model the page renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteView {
    pub content: SiteContent,
    pub gallery: Vec<GalleryEntry>,
    pub policies: Vec<PolicyEntry>,
}

impl Default for SiteContent {
    /// The fallback record shown whenever the CMS supplies no site content.
    /// These literals match the hardcoded variant of the site.
    fn default() -> Self {
        Self {
            business_name: "Nails by Salma".to_string(),
            tagline: "Licensed Private NailTech Location Algonquin IL".to_string(),
            intro_title: "Meet Your Nail Tech".to_string(),
            intro_description: "Hi I'm Salma! I am a private home based Licensed nail tech \
                located in Algonquin IL. Doing nails is my passion and my goal is to make \
                every person who sits in my chair feel beautiful and confident with their \
                nails!"
                .to_string(),
            additional_info: "I provide a clean comfortable space with sanitized items for \
                every client, large variety of colors and nail charms as well as high \
                quality products."
                .to_string(),
            instagram_handle: DEFAULT_HANDLE.to_string(),
            tiktok_handle: DEFAULT_HANDLE.to_string(),
            phone_number: DEFAULT_PHONE.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP.to_string(),
            profile_image: None,
        }
    }
}

impl SiteContent {
    /// `tel:` link for the call button. An unset number falls back to the
    /// studio's own, so the button always dials somewhere sensible.
    pub fn call_href(&self) -> String {
        let phone = non_empty(&self.phone_number, DEFAULT_PHONE);
        format!("tel:{phone}")
    }

    /// WhatsApp chat link, same fallback rule as the call button.
    pub fn whatsapp_href(&self) -> String {
        let number = non_empty(&self.whatsapp_number, DEFAULT_WHATSAPP);
        format!("https://wa.me/{number}")
    }

    pub fn instagram_href(&self) -> String {
        format!("https://instagram.com/{}", self.instagram_handle)
    }

    pub fn tiktok_href(&self) -> String {
        format!("https://tiktok.com/@{}", self.tiktok_handle)
    }

    /// Handle shown next to the Instagram glyph in the header.
    pub fn instagram_display(&self) -> String {
        non_empty(&self.instagram_handle, DEFAULT_HANDLE).to_string()
    }

    /// Handle shown next to the TikTok glyph in the header.
    pub fn tiktok_display(&self) -> String {
        non_empty(&self.tiktok_handle, DEFAULT_HANDLE).to_string()
    }

    /// Handle woven into the gallery's trailing note. The note spells the
    /// studio's own handle lowercase, unlike the header; a custom handle
    /// passes through unchanged.
    pub fn follow_handle(&self) -> String {
        let handle = non_empty(&self.instagram_handle, DEFAULT_HANDLE);
        if handle == DEFAULT_HANDLE {
            FOLLOW_HANDLE.to_string()
        } else {
            handle.to_string()
        }
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_the_hardcoded_site() {
        let content = SiteContent::default();
        assert_eq!(content.business_name, "Nails by Salma");
        assert_eq!(content.tagline, "Licensed Private NailTech Location Algonquin IL");
        assert_eq!(content.intro_title, "Meet Your Nail Tech");
        assert_eq!(content.phone_number, "+254794548718");
        assert_eq!(content.whatsapp_number, "254794548718");
        assert_eq!(content.instagram_handle, "Nailsbysalma");
        assert_eq!(content.tiktok_handle, "Nailsbysalma");
        assert!(content.profile_image.is_none());
    }

    #[test]
    fn default_view_has_no_gallery_or_policies() {
        let view = SiteView::default();
        assert!(view.gallery.is_empty());
        assert!(view.policies.is_empty());
        assert_eq!(view.content, SiteContent::default());
    }

    #[test]
    fn contact_links_use_set_fields_verbatim() {
        let content = SiteContent {
            phone_number: "+15550001111".to_string(),
            whatsapp_number: "15550001111".to_string(),
            instagram_handle: "salma.does.nails".to_string(),
            tiktok_handle: "salma.does.nails".to_string(),
            ..SiteContent::default()
        };
        assert_eq!(content.call_href(), "tel:+15550001111");
        assert_eq!(content.whatsapp_href(), "https://wa.me/15550001111");
        assert_eq!(content.instagram_href(), "https://instagram.com/salma.does.nails");
        assert_eq!(content.tiktok_href(), "https://tiktok.com/@salma.does.nails");
        assert_eq!(content.instagram_display(), "salma.does.nails");
    }

    #[test]
    fn contact_links_fall_back_when_fields_are_unset() {
        let content = SiteContent {
            phone_number: String::new(),
            whatsapp_number: String::new(),
            instagram_handle: String::new(),
            tiktok_handle: String::new(),
            ..SiteContent::default()
        };
        assert_eq!(content.call_href(), "tel:+254794548718");
        assert_eq!(content.whatsapp_href(), "https://wa.me/254794548718");
        assert_eq!(content.instagram_display(), "Nailsbysalma");
        assert_eq!(content.tiktok_display(), "Nailsbysalma");
        // An empty handle still yields a bare profile link, as the page
        // always did.
        assert_eq!(content.instagram_href(), "https://instagram.com/");
    }

    #[test]
    fn gallery_note_spells_the_studio_handle_lowercase() {
        assert_eq!(SiteContent::default().follow_handle(), "nailsbysalma");

        let unset = SiteContent {
            instagram_handle: String::new(),
            ..SiteContent::default()
        };
        assert_eq!(unset.follow_handle(), "nailsbysalma");

        let custom = SiteContent {
            instagram_handle: "salma.does.nails".to_string(),
            ..SiteContent::default()
        };
        assert_eq!(custom.follow_handle(), "salma.does.nails");
    }
}
