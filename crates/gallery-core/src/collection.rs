use crate::config::ConfigError;

/// One image shown on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionItem {
    pub title: String,
    pub img: String,
}

impl CollectionItem {
    pub fn new(title: impl Into<String>, img: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            img: img.into(),
        }
    }
}

/// Built-in (title, image path) pairs.
pub const DEFAULT_COLLECTION: &[(&str, &str)] = &[
    ("Silent Harbor at Dawn", "/img1.jpg"),
    ("Neon Alley", "/img2.jpg"),
    ("Salt Flats", "/img3.jpg"),
    ("The Last Tram Home", "/img4.jpg"),
    ("Fog Over Pines", "/img5.jpg"),
    ("Glass and Concrete", "/img6.jpg"),
    ("Desert Bloom", "/img7.jpg"),
    ("Northern Lights Over Tromsø", "/img8.jpg"),
    ("Market Day", "/img9.jpg"),
    ("Low Tide", "/img10.jpg"),
];

/// Ordered, non-empty image set; indexing wraps around.
#[derive(Clone, Debug)]
pub struct Collection {
    items: Vec<CollectionItem>,
}

impl Collection {
    pub fn new(items: Vec<CollectionItem>) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record for card `index`, cycling through the set when there are more cards than images.
    pub fn item_for_card(&self, index: usize) -> &CollectionItem {
        &self.items[index % self.items.len()]
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            items: DEFAULT_COLLECTION
                .iter()
                .map(|(title, img)| CollectionItem::new(*title, *img))
                .collect(),
        }
    }
}
