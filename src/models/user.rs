use serde::{Deserialize, Serialize};

/// Raw `/users/{name}` record as GitHub returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub public_repo_count: u32,
    pub follower_count: u32,
    pub following_count: u32,
}

impl From<GitHubUser> for UserProfile {
    fn from(user: GitHubUser) -> Self {
        // Accounts without a display name are shown by login.
        let display_name = user
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(user.login);

        Self {
            display_name,
            public_repo_count: user.public_repos,
            follower_count: user.followers,
            following_count: user.following,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_login() {
        let user: GitHubUser = serde_json::from_str(
            r#"{"login": "octocat", "name": null, "public_repos": 8, "followers": 3, "following": 1}"#,
        )
        .unwrap();
        let profile = UserProfile::from(user);
        assert_eq!(profile.display_name, "octocat");
        assert_eq!(profile.public_repo_count, 8);
        assert_eq!(profile.follower_count, 3);
        assert_eq!(profile.following_count, 1);
    }

    #[test]
    fn test_display_name_preferred_when_present() {
        let user: GitHubUser =
            serde_json::from_str(r#"{"login": "octocat", "name": "The Octocat"}"#).unwrap();
        let profile = UserProfile::from(user);
        assert_eq!(profile.display_name, "The Octocat");
        assert_eq!(profile.public_repo_count, 0);
    }
}
