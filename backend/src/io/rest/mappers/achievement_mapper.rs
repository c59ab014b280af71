use shared::{Achievement as SharedAchievement, EarnedAchievement as SharedEarnedAchievement};

use crate::domain::models::{Achievement as DomainAchievement, EarnedAchievement as DomainEarnedAchievement};

pub struct AchievementMapper;

impl AchievementMapper {
    pub fn to_dto(domain: DomainAchievement) -> SharedAchievement {
        SharedAchievement {
            id: domain.id,
            code: domain.code,
            name: domain.name,
            description: domain.description,
            icon: domain.icon,
            requirement: domain.requirement,
        }
    }

    pub fn to_dto_list(achievements: Vec<DomainAchievement>) -> Vec<SharedAchievement> {
        achievements.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_earned_dto(domain: DomainEarnedAchievement) -> SharedEarnedAchievement {
        SharedEarnedAchievement {
            achievement: Self::to_dto(domain.achievement),
            earned_at: domain.earned_at.to_rfc3339(),
        }
    }
}
