//! What the controller is allowed to do to the screen, and an in-memory page that does it.

use std::fmt;

use crate::data::{NewRamen, Ramen, Scalar};

pub const PLACEHOLDER_IMAGE: &str = "./assets/image-placeholder.jpg";
pub const PLACEHOLDER_NAME: &str = "Insert Name Here";
pub const PLACEHOLDER_RESTAURANT: &str = "Insert Restaurant Here";
pub const PLACEHOLDER_RATING: &str = "Insert rating here";
pub const PLACEHOLDER_COMMENT: &str = "Insert comment here";

pub trait MenuView {
    /// Append one menu entry. Rendering the same ramen twice gives two entries.
    fn render_entry(&mut self, ramen: &Ramen);
    fn show_detail(&mut self, ramen: &Ramen);
    /// Write rating and comment into the detail panel without touching the other fields.
    fn show_review(&mut self, rating: &str, comment: &str);
    fn reset_detail(&mut self);
    /// Store a confirmed rating and comment on every entry rendered for `id`, so clicking it
    /// again shows the edited values.
    fn update_entry(&mut self, id: &Scalar, rating: &Scalar, comment: &str);
    /// Remove every entry showing `image`, returning how many went away.
    fn remove_entries(&mut self, image: &str) -> usize;
    fn clear_create_form(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub src: String,
    pub alt: String,
    /// the ramen handed to `Catalog::select` when this entry is clicked
    pub ramen: Ramen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub image: String,
    pub name: String,
    pub restaurant: String,
    pub rating: String,
    pub comment: String,
}

impl DetailPanel {
    pub fn placeholder() -> Self {
        Self {
            image: PLACEHOLDER_IMAGE.to_string(),
            name: PLACEHOLDER_NAME.to_string(),
            restaurant: PLACEHOLDER_RESTAURANT.to_string(),
            rating: PLACEHOLDER_RATING.to_string(),
            comment: PLACEHOLDER_COMMENT.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub menu: Vec<MenuEntry>,
    pub detail: DetailPanel,
    pub create_form: NewRamen,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Click on the menu entry at `index`.
    pub fn activate(&self, index: usize) -> Option<Ramen> {
        self.menu.get(index).map(|entry| entry.ramen.clone())
    }
}

impl MenuView for Page {
    fn render_entry(&mut self, ramen: &Ramen) {
        self.menu.push(MenuEntry {
            src: ramen.image.clone(),
            alt: ramen.name.clone(),
            ramen: ramen.clone(),
        });
    }

    fn show_detail(&mut self, ramen: &Ramen) {
        self.detail = DetailPanel {
            image: ramen.image.clone(),
            name: ramen.name.clone(),
            restaurant: ramen.restaurant.clone(),
            rating: ramen.rating.to_string(),
            comment: ramen.comment.clone(),
        };
    }

    fn show_review(&mut self, rating: &str, comment: &str) {
        self.detail.rating = rating.to_string();
        self.detail.comment = comment.to_string();
    }

    fn reset_detail(&mut self) {
        self.detail = DetailPanel::placeholder();
    }

    fn update_entry(&mut self, id: &Scalar, rating: &Scalar, comment: &str) {
        for entry in self.menu.iter_mut().filter(|entry| &entry.ramen.id == id) {
            entry.ramen.rating = rating.clone();
            entry.ramen.comment = comment.to_string();
        }
    }

    fn remove_entries(&mut self, image: &str) -> usize {
        let before = self.menu.len();
        self.menu.retain(|entry| entry.src != image);
        before - self.menu.len()
    }

    fn clear_create_form(&mut self) {
        self.create_form = NewRamen::default();
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Menu:")?;
        if self.menu.is_empty() {
            writeln!(f, "  (empty)")?;
        }
        for (i, entry) in self.menu.iter().enumerate() {
            writeln!(f, "  {}. {} [{}]", i + 1, entry.alt, entry.src)?;
        }

        let DetailPanel {
            image,
            name,
            restaurant,
            rating,
            comment,
        } = &self.detail;
        writeln!(f, "Detail:")?;
        writeln!(f, "  {name} @ {restaurant}")?;
        writeln!(f, "  image: {image}")?;
        writeln!(f, "  rating: {rating}")?;
        write!(f, "  comment: {comment}")
    }
}
