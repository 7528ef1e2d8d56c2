use tabled::Table;

use crate::{
    aggregate,
    cli::Context,
    failure,
    management::{LibraryStore, Scope},
    types::{ArtistSummary, ArtistTableRow, RangeQuery, SortColumn, SortDirection, Theme},
    utils,
};

pub const CHART_SIZE: usize = 5;
const CHART_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOptions {
    pub range: RangeQuery,
    pub search: String,
    pub sort: SortColumn,
    pub direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            range: RangeQuery::default(),
            search: String::new(),
            sort: SortColumn::default(),
            direction: SortDirection::default(),
            page: 1,
            page_size: crate::config::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Shows totals, the top artists chart and one page of the artist table.
///
/// The view subscribes to the store before loading, so the output is
/// produced by the same path that would redraw it after any later change.
pub async fn dashboard(options: DashboardOptions) {
    if let Err(message) = utils::validate_range(&options.range) {
        failure!("{}", message);
        return;
    }

    let mut ctx = Context::load(false).await;
    if !ctx.authorize().await {
        ctx.save().await;
        return;
    }

    let store = LibraryStore::default();
    let mut scope = Scope::new();
    let theme = ctx.prefs.theme();
    let view_options = options.clone();
    scope.add(store.subscribe(move |artists| {
        println!("{}", render_dashboard(artists, &view_options, theme));
    }));

    ctx.load_summary(&store, &options.range).await;

    scope.teardown();
    ctx.save().await;
}

pub fn render_dashboard(
    artists: &[ArtistSummary],
    options: &DashboardOptions,
    theme: Theme,
) -> String {
    let totals = aggregate::compute_totals(artists);
    let mut out = format!(
        "Artists: {artists}\tTracks: {tracks}\n",
        artists = totals.total_artists,
        tracks = totals.total_tracks
    );

    if artists.is_empty() {
        out.push_str("\nNo artists found in your library.");
        return out;
    }

    out.push_str(&format!("\nTop {} artists\n", CHART_SIZE));
    out.push_str(&utils::render_bar_chart(
        &aggregate::top_n(artists, CHART_SIZE),
        CHART_WIDTH,
    ));
    out.push('\n');

    let page = aggregate::build_page(
        artists,
        &options.search,
        options.sort,
        options.direction,
        options.page,
        options.page_size,
    );

    if page.total_items == 0 {
        out.push_str(&format!("\nNo artists match \"{}\".", options.search.trim()));
        return out;
    }
    if page.items.is_empty() {
        out.push_str(&format!(
            "\nPage {} is empty; there are {} page(s).",
            page.page, page.total_pages
        ));
        return out;
    }

    let offset = (page.page - 1) * page.page_size;
    let rows: Vec<ArtistTableRow> = page
        .items
        .into_iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            position: offset + i + 1,
            artist: a.name,
            tracks: a.count,
            id: a.id,
        })
        .collect();

    let mut table = Table::new(rows);
    utils::styled_table(&mut table, theme);
    out.push_str(&format!(
        "\n{table}\nPage {page} of {pages} ({items} artists)",
        table = table,
        page = page.page,
        pages = page.total_pages,
        items = page.total_items
    ));
    out
}
