use tabled::Table;

use crate::{
    cli::Context,
    info,
    management::OperationLog,
    types::{PlaylistAction, PlaylistTableRow, UserPlaylist},
    utils, warning,
    workflow::PlaylistWorkflow,
};

pub async fn list_playlists() {
    let mut ctx = Context::load(false).await;
    if !ctx.authorize().await {
        ctx.save().await;
        return;
    }

    let log = OperationLog::new();
    let workflow = PlaylistWorkflow::new(&ctx.client, &ctx.ui, &ctx.session, &log);
    if let Ok(playlists) = workflow.list().await {
        if playlists.is_empty() {
            info!("You don't have any playlists.");
        } else {
            let rows: Vec<PlaylistTableRow> = playlists.into_iter().map(to_row).collect();
            let mut table = Table::new(rows);
            utils::styled_table(&mut table, ctx.prefs.theme());
            println!("{}", table);
        }
    }

    ctx.save().await;
}

/// Empties the playlist named or identified by `playlist`. With `library`
/// its tracks are removed from the library as well.
pub async fn clear_playlist(playlist: String, library: bool, assume_yes: bool) {
    let mut ctx = Context::load(assume_yes).await;
    if !ctx.authorize().await {
        ctx.save().await;
        return;
    }

    let action = if library {
        PlaylistAction::ClearPlaylistAndLibrary
    } else {
        PlaylistAction::ClearPlaylist
    };

    let log = OperationLog::new();
    let mut workflow = PlaylistWorkflow::new(&ctx.client, &ctx.ui, &ctx.session, &log);
    if let Ok(playlists) = workflow.list().await {
        match find_playlist(&playlists, &playlist) {
            Some(target) => {
                workflow.clear(target, action).await;
            }
            None => warning!("No playlist \"{}\" found.", playlist),
        }
    }

    if let Some(last) = log.last() {
        info!(
            "Last operation: {:?} on playlist {} at {}",
            last.action,
            last.playlist_id,
            last.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    ctx.save().await;
}

fn find_playlist<'a>(playlists: &'a [UserPlaylist], id_or_name: &str) -> Option<&'a UserPlaylist> {
    playlists.iter().find(|p| p.id == id_or_name).or_else(|| {
        let needle = id_or_name.trim().to_lowercase();
        playlists.iter().find(|p| p.name.to_lowercase() == needle)
    })
}

fn to_row(playlist: UserPlaylist) -> PlaylistTableRow {
    PlaylistTableRow {
        name: playlist.name,
        tracks: playlist
            .tracks_total
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string()),
        owner: playlist.owner.unwrap_or_else(|| "-".to_string()),
        id: playlist.id,
    }
}
