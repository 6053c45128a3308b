use htmlescape::encode_minimal;

use crate::{
    types::{Apod, Track},
    utils::join_artist_names,
};

/// Renders the search result page.
///
/// Every value coming from NASA or Spotify is HTML-escaped before it is
/// embedded. Tracks are listed in the order they were returned.
pub fn render_results(apod: &Apod, tracks: &[Track]) -> String {
    let title = encode_minimal(&apod.title);
    let url = encode_minimal(&apod.url);

    let media = if apod.is_video() {
        format!(
            r#"<iframe src="{url}" title="{title}" width="960" height="540" allowfullscreen></iframe>"#
        )
    } else {
        format!(r#"<img src="{url}" alt="{title}" style="max-width: 100%; height: auto;" />"#)
    };

    let credit = match &apod.copyright {
        Some(copyright) if !copyright.trim().is_empty() => format!(
            "\n    <p><small>&copy; {}</small></p>",
            encode_minimal(copyright.trim())
        ),
        _ => String::new(),
    };

    let items: String = tracks.iter().map(render_track).collect();

    format!(
        r#"
    <h1>{title}</h1>
    {media}
    <p>{explanation}</p>{credit}
    <h2>Spotify Tracks</h2>
    <ul>{items}</ul>
"#,
        explanation = encode_minimal(&apod.explanation),
    )
}

fn render_track(track: &Track) -> String {
    format!(
        r#"<li><a href="{href}" target="_blank" rel="noopener noreferrer">{name} by {artists}</a></li>"#,
        href = encode_minimal(&track.external_url),
        name = encode_minimal(&track.name),
        artists = encode_minimal(&join_artist_names(&track.artist_names)),
    )
}
