//! Static site copy. Everything here is fixed at build time.

/// Label and in-page anchor for each top-level navigation entry.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Works", "#work"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

/// Ids of the sections the landing page renders. Nav anchors must point here.
pub const SECTION_IDS: &[&str] = &["work", "about", "contact"];

pub const MARQUEE_ITEMS: &[&str] = &["Strategy", "Design", "Motion", "3D", "WebGL", "Branding"];

/// (name, image url)
pub const LOGOS: &[(&str, &str)] = &[
    ("Netflix", "https://seeklogo.com/images/N/netflix-logo-0F1EDD3A1F-seeklogo.com.png"),
    ("Airbnb", "https://seeklogo.com/images/A/airbnb-logo-6F78E3C77A-seeklogo.com.png"),
    ("Notion", "https://seeklogo.com/images/N/notion-logo-4CE8FBF5C0-seeklogo.com.png"),
    ("Figma", "https://seeklogo.com/images/F/figma-logo-4B30E73F80-seeklogo.com.png"),
    ("Stripe", "https://seeklogo.com/images/S/stripe-logo-4F5E367DCE-seeklogo.com.png"),
];

/// (title, tag, image url)
pub const WORK_ITEMS: &[(&str, &str, &str)] = &[
    (
        "Aurora Spirits",
        "E-commerce",
        "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1600&auto=format&fit=crop",
    ),
    (
        "Echo Festival",
        "Campaign",
        "https://images.unsplash.com/photo-1536859355448-76f92ebdc33d?q=80&w=1600&auto=format&fit=crop",
    ),
    (
        "Nova Labs",
        "Product",
        "https://images.unsplash.com/photo-1553877522-43269d4ea984?q=80&w=1600&auto=format&fit=crop",
    ),
    (
        "Orbit Fitness",
        "Brand",
        "https://images.unsplash.com/photo-1541534401786-2077eed87a72?q=80&w=1600&auto=format&fit=crop",
    ),
];

/// (icon key, title, blurb) for the about strip cards.
pub const FEATURES: &[(&str, &str, &str)] = &[
    ("sparkles", "Art Direction", "Distinctive look & feel"),
    ("zap", "Micro-interactions", "Delight at every scroll"),
    ("star", "Performance", "Blazing-fast experiences"),
];

/// (name, url) for the footer social row.
pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "#"),
    ("Twitter", "#"),
    ("LinkedIn", "#"),
];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1520942702018-0862200e6873?q=80&w=1600&auto=format&fit=crop";

pub const NOISE_OVERLAY: &str = "https://grainy-gradients.vercel.app/noise.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_anchors_resolve_to_rendered_sections() {
        for (label, href) in NAV_LINKS {
            let id = href
                .strip_prefix('#')
                .unwrap_or_else(|| panic!("{label} link is not an in-page anchor: {href}"));
            assert!(
                SECTION_IDS.contains(&id),
                "{label} points at #{id} but no section renders that id"
            );
        }
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            assert!(!SECTION_IDS[i + 1..].contains(id), "duplicate section id {id}");
        }
    }

    #[test]
    fn remote_images_use_https() {
        let urls = LOGOS
            .iter()
            .map(|(_, url)| *url)
            .chain(WORK_ITEMS.iter().map(|(_, _, url)| *url))
            .chain([HERO_IMAGE, NOISE_OVERLAY]);
        for url in urls {
            assert!(url.starts_with("https://"), "non-https asset url: {url}");
        }
    }

    #[test]
    fn feature_icons_are_known() {
        for (icon, title, _) in FEATURES {
            assert!(
                matches!(*icon, "sparkles" | "zap" | "star"),
                "{title} names an unknown icon {icon}"
            );
        }
    }
}
