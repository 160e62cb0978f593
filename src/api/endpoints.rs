// Stats REST endpoint definitions and URL builders

pub const DEFAULT_BASE_URL: &str = "https://api.nhle.com/stats/rest/en";

const TEAM_SUMMARY_PATH: &str = "team/summary";

// Regular season, sorted by points, teams with at least one game
const TEAM_SUMMARY_QUERY: &str = "isAggregate=false&isGame=false\
&sort=%5B%7B%22property%22:%22points%22,%22direction%22:%22DESC%22%7D%5D\
&start=0&limit=50&factCayenneExp=gamesPlayed%3E=1&cayenneExp=gameTypeId=2%20and%20seasonId=";

pub fn team_summary_url(base_url: &str, season: &str) -> String {
    format!(
        "{}/{}?{}{}",
        base_url.trim_end_matches('/'),
        TEAM_SUMMARY_PATH,
        TEAM_SUMMARY_QUERY,
        season
    )
}
