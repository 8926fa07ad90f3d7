//! Hardcoded variant of the studio page. Everything ships in the binary;
//! there is no network and no loading state.

use yew::prelude::*;

use salma_site_core::content::{GalleryEntry, PolicyEntry, SiteContent, SiteImage, SiteView};
use salma_site_core::icons::PolicyIcon;
use salma_site_core::ui;

const PROFILE_PHOTO: &str =
    "https://images.unsplash.com/photo-1604654894610-df63bc536371?w=400&h=500&fit=crop";

/// The twelve showcase designs, in display order.
fn showcase_gallery() -> Vec<GalleryEntry> {
    let designs = [
        (
            "French Manicure",
            "Classic French tips with gel polish",
            "https://images.unsplash.com/photo-1604654894610-df63bc536371?w=400&h=500&fit=crop",
        ),
        (
            "Gel Extensions",
            "Long lasting gel nail extensions",
            "https://images.unsplash.com/photo-1610992015732-2449b76344bc?w=400&h=500&fit=crop",
        ),
        (
            "Nail Art",
            "Creative custom nail art designs",
            "https://images.unsplash.com/photo-1622287162716-f311baa1a2b8?w=400&h=500&fit=crop",
        ),
        (
            "Ombre Nails",
            "Beautiful gradient color blending",
            "https://images.unsplash.com/photo-1519014816548-bf5fe059798b?w=400&h=500&fit=crop",
        ),
        (
            "Glitter Design",
            "Sparkly glitter accent nails",
            "https://images.unsplash.com/photo-1599948128020-9a44d9b8b9e4?w=400&h=500&fit=crop",
        ),
        (
            "Matte Finish",
            "Elegant matte nail polish",
            "https://images.unsplash.com/photo-1596434267157-deb57fa3d5ac?w=400&h=500&fit=crop",
        ),
        (
            "Floral Art",
            "Hand-painted floral designs",
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=500&fit=crop",
        ),
        (
            "Chrome Nails",
            "Mirror finish chrome effect",
            "https://images.unsplash.com/photo-1522338242992-e1a54906a8da?w=400&h=500&fit=crop",
        ),
        (
            "Marble Effect",
            "Stunning marble pattern nails",
            "https://images.unsplash.com/photo-1606471838103-9b5e6b68e1a4?w=400&h=500&fit=crop",
        ),
        (
            "Crystal Accents",
            "Luxurious crystal embellishments",
            "https://images.unsplash.com/photo-1588471980393-2c4e5d9de7da?w=400&h=500&fit=crop",
        ),
        (
            "Geometric Design",
            "Modern geometric patterns",
            "https://images.unsplash.com/photo-1583792550231-79a0e0117bb5?w=400&h=500&fit=crop",
        ),
        (
            "Seasonal Special",
            "Limited time seasonal designs",
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=500&fit=crop",
        ),
    ];

    designs
        .into_iter()
        .enumerate()
        .map(|(i, (title, description, url))| GalleryEntry {
            id: i as u32 + 1,
            title: title.to_string(),
            description: description.to_string(),
            image: Some(SiteImage {
                url: url.to_string(),
                alt: None,
            }),
        })
        .collect()
}

fn booking_policies() -> Vec<PolicyEntry> {
    let policies = [
        (
            "PAYMENT",
            "$15 non-refundable deposit is required. Remaining balance in person must be paid",
            PolicyIcon::Payment,
        ),
        (
            "CANCELLATION / NO SHOWS",
            "No shows or same day cancellations will be charged a fee and forfeit deposit",
            PolicyIcon::Cancellation,
        ),
        (
            "LATE ARRIVAL",
            "10 min grace period, after 10 min there is a $10 fee but at 15 min your appt. is \
             cancelled & you will be forfeited the $25 fee. Check time destination & set alarms \
             to arrive on time",
            PolicyIcon::Time,
        ),
        (
            "SAFETY",
            "I do not work on open wounds/infected nails. Please come with bare nails. No polish \
             or fake nails unless you select a refill on my work. Address is confidential, it \
             disclosed legal action will take",
            PolicyIcon::Safety,
        ),
    ];

    policies
        .into_iter()
        .enumerate()
        .map(|(i, (title, description, icon))| PolicyEntry {
            id: i as u32 + 1,
            title: title.to_string(),
            description: description.to_string(),
            icon,
        })
        .collect()
}

fn static_view() -> SiteView {
    SiteView {
        content: SiteContent {
            profile_image: Some(SiteImage {
                url: PROFILE_PHOTO.to_string(),
                alt: Some("Me".to_string()),
            }),
            ..SiteContent::default()
        },
        gallery: showcase_gallery(),
        policies: booking_policies(),
    }
}

#[function_component(App)]
fn app() -> Html {
    let view = use_memo((), |_| static_view());
    ui::page(&view)
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_has_twelve_entries_with_unique_ids() {
        let gallery = showcase_gallery();
        assert_eq!(gallery.len(), 12);

        let mut ids: Vec<u32> = gallery.iter().map(|e| e.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 12);

        assert_eq!(gallery[0].title, "French Manicure");
        assert_eq!(gallery[11].title, "Seasonal Special");
        assert!(gallery.iter().all(|e| e.image.is_some()));
    }

    #[test]
    fn policies_pair_each_rule_with_its_icon() {
        let policies = booking_policies();
        let icons: Vec<PolicyIcon> = policies.iter().map(|p| p.icon).collect();
        assert_eq!(
            icons,
            [
                PolicyIcon::Payment,
                PolicyIcon::Cancellation,
                PolicyIcon::Time,
                PolicyIcon::Safety,
            ]
        );
        assert_eq!(policies[1].title, "CANCELLATION / NO SHOWS");
        // The safety card's wording is kept exactly as it appears on the
        // studio's page, stray grammar included.
        assert_eq!(
            policies[3].description,
            "I do not work on open wounds/infected nails. Please come with bare nails. No polish \
             or fake nails unless you select a refill on my work. Address is confidential, it \
             disclosed legal action will take"
        );
    }

    #[test]
    fn static_view_fills_every_section() {
        let view = static_view();
        assert!(view.content.profile_image.is_some());
        assert!(!view.gallery.is_empty());
        assert!(!view.policies.is_empty());
    }
}
