//! Fixed per-platform assessment templates
//!
//! Each template carries the privacy settings, activity data, and risk
//! assessment the simulator reports for a profile on that platform. Risk
//! levels follow the score banding convention: >= 70 low, 40-69 medium,
//! below 40 high.

use privalens_core::{MetricValue, Platform, RiskAssessment, RiskLevel, SettingValue};
use std::collections::BTreeMap;

pub(crate) struct AssessmentTemplate {
    pub privacy_settings: BTreeMap<String, SettingValue>,
    pub activity_data: BTreeMap<String, MetricValue>,
    pub risk_assessment: RiskAssessment,
}

fn settings<const N: usize>(entries: [(&str, SettingValue); N]) -> BTreeMap<String, SettingValue> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn metrics<const N: usize>(entries: [(&str, MetricValue); N]) -> BTreeMap<String, MetricValue> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn strings<const N: usize>(entries: [&str; N]) -> Vec<String> {
    entries.into_iter().map(str::to_string).collect()
}

pub(crate) fn for_platform(platform: Platform) -> AssessmentTemplate {
    match platform {
        Platform::Twitter => twitter(),
        Platform::Facebook => facebook(),
        Platform::Instagram => instagram(),
        Platform::Linkedin => linkedin(),
        Platform::Tiktok => tiktok(),
        Platform::Youtube => youtube(),
        Platform::Unknown => generic(),
    }
}

fn twitter() -> AssessmentTemplate {
    AssessmentTemplate {
        privacy_settings: settings([
            ("account_privacy", "public".into()),
            ("who_can_message", "everyone".into()),
            ("location_sharing", true.into()),
            ("data_personalization", true.into()),
            ("tagged_photo_review", false.into()),
        ]),
        activity_data: metrics([
            ("post_count", 423.into()),
            ("follower_count", 1245.into()),
            ("following_count", 867.into()),
            ("retweet_count", 256.into()),
            ("like_count", 1782.into()),
            ("lists_count", 5.into()),
            ("verification_status", false.into()),
            ("tweets_with_media", 73.into()),
        ]),
        risk_assessment: RiskAssessment::new(
            35,
            RiskLevel::High,
            strings([
                "Public account exposes your content to anyone",
                "Location data attached to multiple posts",
                "Data personalization enabled allows platform to track preferences",
            ]),
            strings([
                "Set your account to private",
                "Disable location sharing",
                "Disable data personalization in settings",
            ]),
        ),
    }
}

fn facebook() -> AssessmentTemplate {
    AssessmentTemplate {
        privacy_settings: settings([
            ("profile_visibility", "public".into()),
            ("friend_list_visibility", "friends".into()),
            ("future_post_privacy", "public".into()),
            ("tagged_photo_review", true.into()),
            ("face_recognition", true.into()),
        ]),
        activity_data: metrics([
            ("post_count", 278.into()),
            ("follower_count", 843.into()),
            ("following_count", 462.into()),
            ("friend_count", 732.into()),
            ("page_likes", 156.into()),
            ("group_memberships", 12.into()),
            ("events_attended", 34.into()),
            ("photos_uploaded", 189.into()),
        ]),
        risk_assessment: RiskAssessment::new(
            42,
            RiskLevel::High,
            strings([
                "Public profile visibility exposes your information to anyone",
                "Face recognition enabled can reduce privacy",
                "High post count creates a detailed digital footprint",
            ]),
            strings([
                "Set your profile to friends only",
                "Turn off face recognition",
                "Review and limit past post visibility",
            ]),
        ),
    }
}

fn instagram() -> AssessmentTemplate {
    AssessmentTemplate {
        privacy_settings: settings([
            ("account_privacy", "private".into()),
            ("activity_status", true.into()),
            ("story_sharing", "close friends only".into()),
            ("mentioned_story_sharing", false.into()),
            ("data_sharing_with_partners", true.into()),
        ]),
        activity_data: metrics([
            ("post_count", 156.into()),
            ("follower_count", 925.into()),
            ("following_count", 534.into()),
            ("average_likes", 112.into()),
            ("highlight_reels", 8.into()),
            ("saved_posts", 43.into()),
            ("tagged_photos", 27.into()),
            ("stories_posted", 312.into()),
        ]),
        risk_assessment: RiskAssessment::new(
            65,
            RiskLevel::Medium,
            strings([
                "Data sharing with partners enabled",
                "Activity status visible to all followers",
            ]),
            strings([
                "Disable data sharing with partners",
                "Turn off activity status",
            ]),
        ),
    }
}

fn linkedin() -> AssessmentTemplate {
    AssessmentTemplate {
        privacy_settings: settings([
            ("profile_visibility", "public".into()),
            ("email_visibility", "connections".into()),
            ("activity_broadcast", true.into()),
            ("profile_photo_visibility", "public".into()),
            ("data_research_sharing", false.into()),
        ]),
        activity_data: metrics([
            ("post_count", 87.into()),
            ("follower_count", 1530.into()),
            ("following_count", 612.into()),
            ("connection_count", 498.into()),
            ("endorsements", 113.into()),
            ("articles_published", 6.into()),
            ("profile_views", 342.into()),
        ]),
        risk_assessment: RiskAssessment::new(
            72,
            RiskLevel::Low,
            strings([
                "Public profile photo and headline are visible to non-members",
                "Activity broadcasts announce profile changes to your network",
            ]),
            strings([
                "Limit profile photo visibility to your connections",
                "Turn off activity broadcasts while editing your profile",
            ]),
        ),
    }
}

fn tiktok() -> AssessmentTemplate {
    AssessmentTemplate {
        privacy_settings: settings([
            ("account_privacy", "public".into()),
            ("duet_permissions", "everyone".into()),
            ("comment_filtering", false.into()),
            ("personalized_ads", true.into()),
            ("download_permissions", true.into()),
        ]),
        activity_data: metrics([
            ("post_count", 214.into()),
            ("follower_count", 3408.into()),
            ("following_count", 291.into()),
            ("like_count", 12843.into()),
            ("video_views", 58210.into()),
            ("verification_status", false.into()),
        ]),
        risk_assessment: RiskAssessment::new(
            38,
            RiskLevel::High,
            strings([
                "Public account exposes your videos to anyone",
                "Anyone can duet with and download your videos",
                "Personalized ads track your viewing behavior",
            ]),
            strings([
                "Switch to a private account",
                "Restrict duets and downloads to friends",
                "Disable personalized ads",
            ]),
        ),
    }
}

fn youtube() -> AssessmentTemplate {
    AssessmentTemplate {
        privacy_settings: settings([
            ("subscriptions_visibility", "public".into()),
            ("saved_playlists_visibility", "public".into()),
            ("comment_moderation", "hold for review".into()),
            ("personalized_ads", true.into()),
            ("activity_sharing", false.into()),
        ]),
        activity_data: metrics([
            ("post_count", 58.into()),
            ("follower_count", 2140.into()),
            ("following_count", 187.into()),
            ("total_views", 95230.into()),
            ("playlists_created", 9.into()),
            ("comments_posted", 412.into()),
        ]),
        risk_assessment: RiskAssessment::new(
            55,
            RiskLevel::Medium,
            strings([
                "Public subscriptions and playlists reveal your interests",
                "Personalized ads profile your watch history",
            ]),
            strings([
                "Set subscriptions and playlists to private",
                "Turn off ad personalization",
            ]),
        ),
    }
}

fn generic() -> AssessmentTemplate {
    AssessmentTemplate {
        privacy_settings: settings([
            ("profile_visibility", "public".into()),
            ("contact_info_visible", false.into()),
            ("search_engine_indexing", true.into()),
        ]),
        activity_data: metrics([
            ("post_count", 120.into()),
            ("follower_count", 340.into()),
            ("following_count", 280.into()),
        ]),
        risk_assessment: RiskAssessment::new(
            50,
            RiskLevel::Medium,
            strings([
                "Profile is reachable from search engines",
                "Visibility settings could not be fully determined",
            ]),
            strings([
                "Review the platform's privacy settings",
                "Limit what search engines can index",
            ]),
        ),
    }
}
