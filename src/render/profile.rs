use crate::models::UserProfile;
use crate::render::palette::Palette;
use crate::render::INDENT;

pub const BIO_PLACEHOLDER: &str = "N/A";
pub const LOCATION_PLACEHOLDER: &str = "Not Provided";

/// Formats the profile card shown to the right of the avatar.
pub fn format_profile(
    profile: &UserProfile,
    starred_count: usize,
    username: &str,
    palette: &Palette,
) -> String {
    let github_url = format!("{}@github.com", username);
    let colors = &palette.labels;

    let fields: [(u8, &str, String); 7] = [
        (colors.username, "Username:", profile.login.clone()),
        (colors.repos, "Repos:", profile.public_repos.to_string()),
        (
            colors.bio,
            "Bio:",
            profile.bio().unwrap_or(BIO_PLACEHOLDER).to_string(),
        ),
        (
            colors.location,
            "From:",
            profile.location().unwrap_or(LOCATION_PLACEHOLDER).to_string(),
        ),
        (colors.followers, "Followers:", profile.followers.to_string()),
        (colors.following, "Following:", profile.following.to_string()),
        (colors.starred, "Starred repos:", starred_count.to_string()),
    ];

    let mut output = String::new();
    output.push_str(&format!("{} {}\n", INDENT, github_url));
    output.push_str(&format!("{} {}\n", INDENT, "-".repeat(github_url.chars().count())));

    for (color, label, value) in fields {
        output.push_str(&format!("{} {} {}\n", INDENT, palette.paint(color, label), value));
    }

    output.push_str("\n\n");
    output
}
