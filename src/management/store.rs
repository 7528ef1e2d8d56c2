use crate::{
    aggregate,
    management::{Signal, Subscription},
    types::{ArtistSummary, Page, SortColumn, SortDirection, Totals},
};

/// Owns the artist summary list. Everything else the dashboard shows is
/// derived from it on demand.
#[derive(Clone)]
pub struct LibraryStore {
    artists: Signal<Vec<ArtistSummary>>,
}

impl LibraryStore {
    pub fn new(artists: Option<Vec<ArtistSummary>>) -> Self {
        Self {
            artists: Signal::new(artists.unwrap_or_default()),
        }
    }

    pub fn replace(&self, artists: Vec<ArtistSummary>) -> &Self {
        self.artists.set(artists);
        self
    }

    pub fn remove(&self, artist_id: &str) -> &Self {
        self.artists.update(|list| list.retain(|a| a.id != artist_id));
        self
    }

    pub fn snapshot(&self) -> Vec<ArtistSummary> {
        self.artists.get()
    }

    pub fn find(&self, id_or_name: &str) -> Option<ArtistSummary> {
        self.artists
            .with(|list| crate::utils::find_artist(list, id_or_name).cloned())
    }

    pub fn count_artists(&self) -> usize {
        self.artists.with(|list| list.len())
    }

    pub fn totals(&self) -> Totals {
        self.artists.with(|list| aggregate::compute_totals(list))
    }

    pub fn top(&self, n: usize) -> Vec<ArtistSummary> {
        self.artists.with(|list| aggregate::top_n(list, n))
    }

    pub fn view(
        &self,
        query: &str,
        column: SortColumn,
        direction: SortDirection,
        page: usize,
        page_size: usize,
    ) -> Page {
        self.artists.with(|list| {
            aggregate::build_page(list, query, column, direction, page, page_size)
        })
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&Vec<ArtistSummary>) + Send + Sync + 'static,
    ) -> Subscription {
        self.artists.subscribe(listener)
    }
}

impl Default for LibraryStore {
    fn default() -> Self {
        Self::new(None)
    }
}
