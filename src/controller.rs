use crate::api::RamenApi;
use crate::data::{NewRamen, Ramen, RamenPatch};
use crate::error::{CatalogError, Result};
use crate::view::MenuView;

/// The ramen currently shown in the detail panel.
///
/// Empty until the first load or click. A new selection replaces the old one outright, only a
/// confirmed edit changes it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection(Option<Ramen>);

impl Selection {
    pub fn get(&self) -> Option<&Ramen> {
        self.0.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    fn replace(&mut self, ramen: Ramen) {
        self.0 = Some(ramen);
    }

    fn require(&self) -> Result<&Ramen> {
        self.0.as_ref().ok_or(CatalogError::NoSelection)
    }

    fn require_mut(&mut self) -> Result<&mut Ramen> {
        self.0.as_mut().ok_or(CatalogError::NoSelection)
    }
}

pub struct Catalog<A, V> {
    api: A,
    view: V,
    selection: Selection,
}

impl<A: RamenApi, V: MenuView> Catalog<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            selection: Selection::default(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Load every ramen into the menu and show the first one. Returns how many were rendered.
    pub async fn initialize(&mut self) -> Result<usize> {
        let ramens = self.api.list().await.map_err(|e| {
            tracing::error!("fail to load ramens: {e}");
            e
        })?;

        for ramen in &ramens {
            self.render_entry(ramen);
        }
        let count = ramens.len();
        if let Some(first) = ramens.into_iter().next() {
            self.select(first);
        }

        tracing::info!(count, "menu loaded");
        Ok(count)
    }

    pub fn select(&mut self, ramen: Ramen) {
        tracing::debug!(id = %ramen.id, name = %ramen.name, "select ramen");
        self.view.show_detail(&ramen);
        self.selection.replace(ramen);
    }

    pub fn render_entry(&mut self, ramen: &Ramen) {
        self.view.render_entry(ramen);
    }

    /// Post the form as is. The form is only cleared once the server accepted it.
    pub async fn create(&mut self, draft: NewRamen) -> Result<Ramen> {
        let ramen = self.api.create(&draft).await.map_err(|e| {
            tracing::warn!(name = %draft.name, "fail to create ramen: {e}");
            e
        })?;

        self.render_entry(&ramen);
        self.view.clear_create_form();
        tracing::info!(id = %ramen.id, name = %ramen.name, "ramen created");
        Ok(ramen)
    }

    /// The detail panel is updated before the request is sent and is not rolled back if it fails.
    pub async fn edit(&mut self, rating: &str, comment: &str) -> Result<&Ramen> {
        let id = self.selection.require()?.id.clone();

        self.view.show_review(rating, comment);

        let patch = RamenPatch {
            rating: rating.to_string(),
            comment: comment.to_string(),
        };
        let updated = self.api.update(&id, &patch).await.map_err(|e| {
            tracing::warn!(%id, "fail to update ramen: {e}");
            e
        })?;

        let current = self.selection.require_mut()?;
        current.rating = updated.rating;
        current.comment = updated.comment;
        self.view
            .update_entry(&current.id, &current.rating, &current.comment);
        tracing::info!(%id, "ramen updated");
        Ok(&*current)
    }

    /// Returns the number of menu entries removed.
    ///
    /// Entries are matched by image, not id, so every entry sharing the selected image goes. The
    /// selection itself is kept.
    pub async fn delete(&mut self) -> Result<usize> {
        let selected = self.selection.require()?;
        let id = selected.id.clone();
        let image = selected.image.clone();

        self.api.delete(&id).await.map_err(|e| {
            tracing::warn!(%id, "fail to delete ramen: {e}");
            e
        })?;

        let removed = self.view.remove_entries(&image);
        self.view.reset_detail();
        tracing::info!(%id, removed, "ramen deleted");
        Ok(removed)
    }
}
