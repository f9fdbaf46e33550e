use serde::{Deserialize, Deserializer, Serialize};

/// One timestamped line of synced lyrics
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LyricLine {
    pub time: f64, // Seconds from track start
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LyricsResult {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub album_name: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub instrumental: bool,
    pub plain_lyrics: Option<String>,
    #[serde(default, deserialize_with = "deserialize_synced")]
    pub synced_lyrics: Option<Vec<LyricLine>>,
}

impl LyricsResult {
    /// Synced lines, if the result has any
    pub fn synced_lines(&self) -> Option<&[LyricLine]> {
        self.synced_lyrics
            .as_deref()
            .filter(|lines| !lines.is_empty())
    }

    /// Plain lyrics split into display rows (blank rows kept)
    pub fn plain_lines(&self) -> Vec<&str> {
        self.plain_lyrics
            .as_deref()
            .map(|text| text.split('\n').map(|l| l.trim_end_matches('\r')).collect())
            .unwrap_or_default()
    }
}

/// Backends either pre-parse synced lyrics into an array or pass the raw LRC text through
#[derive(Deserialize)]
#[serde(untagged)]
enum SyncedField {
    Lines(Vec<LyricLine>),
    Lrc(String),
}

fn deserialize_synced<'de, D>(deserializer: D) -> Result<Option<Vec<LyricLine>>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<SyncedField>::deserialize(deserializer)?;
    let mut lines = match field {
        None => return Ok(None),
        Some(SyncedField::Lines(lines)) => lines,
        Some(SyncedField::Lrc(text)) => parse_lrc(&text),
    };
    // Stable sort keeps lines sharing a timestamp in source order
    lines.sort_by(|a, b| a.time.total_cmp(&b.time));
    Ok(Some(lines))
}

/// Parse LRC text (`[mm:ss.xx] text`) into timed lines.
///
/// A line may carry several timestamps (`[00:12.00][01:30.50] chorus`), each
/// producing its own entry. Metadata tags like `[ar:...]` and untimed lines
/// are skipped. The result is not sorted.
pub fn parse_lrc(text: &str) -> Vec<LyricLine> {
    let mut lines = Vec::new();

    for raw in text.lines() {
        let mut rest = raw.trim();
        let mut stamps = Vec::new();

        while let Some(stripped) = rest.strip_prefix('[') {
            let Some(end) = stripped.find(']') else { break };
            match parse_timestamp(&stripped[..end]) {
                Some(t) => stamps.push(t),
                None => break,
            }
            rest = &stripped[end + 1..];
        }

        let text = rest.trim().to_string();
        for time in stamps {
            lines.push(LyricLine {
                time,
                text: text.clone(),
            });
        }
    }

    lines
}

fn parse_timestamp(stamp: &str) -> Option<f64> {
    let (minutes, seconds) = stamp.split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: f64 = seconds.trim().parse().ok()?;
    if !(0.0..60.0).contains(&seconds) {
        return None;
    }
    Some(minutes as f64 * 60.0 + seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synced_lyrics_as_array() {
        let json = r#"{
            "id": 7,
            "trackName": "Song",
            "artistName": "Artist",
            "albumName": "Album",
            "duration": 200,
            "instrumental": false,
            "plainLyrics": "a\nb",
            "syncedLyrics": [{"time": 5.0, "text": "b"}, {"time": 1.5, "text": "a"}]
        }"#;
        let lyrics: LyricsResult = serde_json::from_str(json).unwrap();
        let lines = lyrics.synced_lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "a");
        assert_eq!(lines[1].time, 5.0);
    }

    #[test]
    fn test_synced_lyrics_as_lrc_string() {
        let json = r#"{
            "trackName": "Song",
            "artistName": "Artist",
            "instrumental": false,
            "plainLyrics": null,
            "syncedLyrics": "[ar:Artist]\n[00:01.50] first\n[00:10.00][01:00.00] chorus\n"
        }"#;
        let lyrics: LyricsResult = serde_json::from_str(json).unwrap();
        let lines = lyrics.synced_lines().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text, "first");
        assert!((lines[0].time - 1.5).abs() < f64::EPSILON);
        assert_eq!(lines[2].time, 60.0);
        assert_eq!(lines[2].text, "chorus");
    }

    #[test]
    fn test_null_synced_lyrics() {
        let json = r#"{"instrumental": true, "plainLyrics": null, "syncedLyrics": null}"#;
        let lyrics: LyricsResult = serde_json::from_str(json).unwrap();
        assert!(lyrics.instrumental);
        assert!(lyrics.synced_lines().is_none());
        assert!(lyrics.plain_lines().is_empty());
    }

    #[test]
    fn test_plain_lines_keep_blank_rows() {
        let json = r#"{"plainLyrics": "one\n\ntwo"}"#;
        let lyrics: LyricsResult = serde_json::from_str(json).unwrap();
        assert_eq!(lyrics.plain_lines(), vec!["one", "", "two"]);
    }

    #[test]
    fn test_parse_lrc_rejects_bad_stamps() {
        let lines = parse_lrc("[xx:yy] nope\n[00:75.00] nope\nplain line\n[02:03.25]");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].time, 123.25);
        assert_eq!(lines[0].text, "");
    }
}
