use crate::{
    aggregate,
    cli::Context,
    failure, info,
    management::{LibraryStore, Scope},
    types::{ArtistSummary, RangeQuery},
    ui::Ui,
    utils, warning,
    workflow::{DeletionTarget, DeletionWorkflow},
};

pub async fn delete_artist(artist: String, assume_yes: bool) {
    let mut ctx = Context::load(assume_yes).await;
    if !ctx.authorize().await {
        ctx.save().await;
        return;
    }

    let store = LibraryStore::default();
    if !ctx.load_summary(&store, &RangeQuery::default()).await {
        ctx.save().await;
        return;
    }

    let Some(found) = store.find(&artist) else {
        warning!("No artist \"{}\" in your library.", artist);
        ctx.save().await;
        return;
    };

    let mut scope = Scope::new();
    scope.add(store.subscribe(report_totals));

    let mut workflow = DeletionWorkflow::new(&ctx.client, &ctx.ui, &ctx.session, &store);
    workflow
        .run(DeletionTarget::Artist {
            id: found.id,
            name: found.name,
        })
        .await;

    scope.teardown();
    ctx.save().await;
}

pub async fn delete_range(min: Option<u64>, max: Option<u64>, assume_yes: bool) {
    let range = RangeQuery::new(min, max);
    if let Err(message) = utils::validate_range(&range) {
        failure!("{}", message);
        return;
    }

    let mut ctx = Context::load(assume_yes).await;
    let store = LibraryStore::default();
    let mut workflow =
        DeletionWorkflow::new(&ctx.client, &ctx.ui, &ctx.session, &store).with_reload_range(range);

    // refuses an unbounded range before anything is sent
    let Ok(prompt) = workflow.request(DeletionTarget::Range(range)) else {
        return;
    };

    if !ctx.authorize().await {
        let _ = workflow.cancel();
        drop(workflow);
        ctx.save().await;
        return;
    }

    // a 401 here has already ended the session; nothing may be sent after it
    if !ctx.load_summary(&store, &range).await || !ctx.session.is_authenticated() {
        let _ = workflow.cancel();
        drop(workflow);
        ctx.save().await;
        return;
    }
    let affected = store.totals();
    info!(
        "{} artists with {} tracks in total match this range.",
        affected.total_artists, affected.total_tracks
    );

    let mut scope = Scope::new();
    scope.add(store.subscribe(report_totals));

    if ctx.ui.confirm(&prompt) {
        workflow.confirm().await;
    } else {
        let _ = workflow.cancel();
    }

    scope.teardown();
    drop(workflow);
    ctx.save().await;
}

fn report_totals(artists: &Vec<ArtistSummary>) {
    let totals = aggregate::compute_totals(artists);
    info!(
        "Library summary now lists {} tracks by {} artists.",
        totals.total_tracks, totals.total_artists
    );
}
