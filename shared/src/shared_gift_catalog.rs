use once_cell::sync::Lazy;
use serde::{Serialize, Deserialize};

/// Tailwind gradient stops for one gift box, plus the flat hex color its
/// wheel segment is painted with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftColors {
    pub box_gradient: String,
    pub lid_gradient: String,
    pub ribbon_gradient: String,
    pub wheel: String,
}

/// One entry of the fixed gift table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gift {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub description: String,
    pub colors: GiftColors,
}

fn gift(
    id: u32,
    name: &str,
    image: &str,
    description: &str,
    palette: (&str, &str, &str, &str),
) -> Gift {
    let (box_gradient, lid_gradient, ribbon_gradient, wheel) = palette;
    Gift {
        id,
        name: name.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        colors: GiftColors {
            box_gradient: box_gradient.to_string(),
            lid_gradient: lid_gradient.to_string(),
            ribbon_gradient: ribbon_gradient.to_string(),
            wheel: wheel.to_string(),
        },
    }
}

static GIFT_CATALOG: Lazy<Vec<Gift>> = Lazy::new(|| {
    vec![
        gift(
            1,
            "New Camera",
            "/images/gift1.jpg",
            "I got you that Canon camera you've been wanting! It's still being shipped, but it will arrive next week.",
            (
                "from-pink-500 to-rose-500",
                "from-pink-400 to-rose-400",
                "from-pink-700 to-rose-700",
                "#ec4899",
            ),
        ),
        gift(
            2,
            "Spa Day",
            "/images/gift2.jpg",
            "A full day at the spa with all treatments included. You deserve some relaxation!",
            (
                "from-blue-500 to-cyan-500",
                "from-blue-400 to-cyan-400",
                "from-blue-700 to-cyan-700",
                "#06b6d4",
            ),
        ),
        gift(
            3,
            "Concert Tickets",
            "/images/gift3.jpg",
            "Two tickets to see your favorite band next month! I'll be your plus one if you want 😉",
            (
                "from-purple-500 to-indigo-500",
                "from-purple-400 to-indigo-400",
                "from-purple-700 to-indigo-700",
                "#8b5cf6",
            ),
        ),
        gift(
            4,
            "Weekend Getaway",
            "/images/gift4.jpg",
            "A weekend trip to that cute B&B by the beach you've been talking about!",
            (
                "from-amber-500 to-orange-500",
                "from-amber-400 to-orange-400",
                "from-amber-700 to-orange-700",
                "#f59e0b",
            ),
        ),
        gift(
            5,
            "Art Supplies",
            "/images/gift5.jpg",
            "A complete set of professional art supplies for your new painting hobby!",
            (
                "from-emerald-500 to-teal-500",
                "from-emerald-400 to-teal-400",
                "from-emerald-700 to-teal-700",
                "#10b981",
            ),
        ),
        gift(
            6,
            "Mystery Gift",
            "/images/gift6.jpg",
            "This one is a real surprise! You'll have to wait until it arrives to find out what it is...",
            (
                "from-red-500 to-rose-500",
                "from-red-400 to-rose-400",
                "from-red-700 to-rose-700",
                "#ef4444",
            ),
        ),
        gift(
            7,
            "Photo Book",
            "/images/gift7.jpg",
            "A custom photo album with all our best memories together. It's a trip down memory lane!",
            (
                "from-violet-500 to-purple-500",
                "from-violet-400 to-purple-400",
                "from-violet-700 to-purple-700",
                "#a855f7",
            ),
        ),
        gift(
            8,
            "Jewelry",
            "/images/gift8.jpg",
            "That beautiful necklace you've been eyeing. It'll look perfect on you!",
            (
                "from-yellow-500 to-amber-500",
                "from-yellow-400 to-amber-400",
                "from-yellow-700 to-amber-700",
                "#eab308",
            ),
        ),
    ]
});

/// The fixed gift table shown on the page.
pub fn gift_catalog() -> &'static [Gift] {
    &GIFT_CATALOG
}

/// Image identifiers for the preloader, in catalog order.
pub fn image_urls() -> Vec<String> {
    GIFT_CATALOG.iter().map(|gift| gift.image.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique_and_nonzero() {
        let ids: HashSet<u32> = gift_catalog().iter().map(|gift| gift.id).collect();
        assert_eq!(ids.len(), gift_catalog().len());
        assert!(!ids.contains(&0));
    }

    #[test]
    fn every_gift_has_an_image_and_description() {
        for gift in gift_catalog() {
            assert!(!gift.image.is_empty(), "gift {} missing image", gift.id);
            assert!(!gift.description.is_empty(), "gift {} missing description", gift.id);
        }
    }

    #[test]
    fn image_urls_follow_catalog_order() {
        let urls = image_urls();
        assert_eq!(urls.len(), gift_catalog().len());
        assert_eq!(urls[0], gift_catalog()[0].image);
    }
}
