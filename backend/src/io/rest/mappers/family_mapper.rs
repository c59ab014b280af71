use shared::{CreateFamilyRequest, Family as SharedFamily, FamilyListResponse};

use crate::domain::commands::family::CreateFamilyCommand;
use crate::domain::models::Family as DomainFamily;

pub struct FamilyMapper;

impl FamilyMapper {
    pub fn to_create_command(request: CreateFamilyRequest) -> CreateFamilyCommand {
        CreateFamilyCommand { name: request.name }
    }

    pub fn to_dto(domain: DomainFamily) -> SharedFamily {
        SharedFamily {
            id: domain.id,
            name: domain.name,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_list_response(families: Vec<DomainFamily>) -> FamilyListResponse {
        FamilyListResponse {
            families: families.into_iter().map(Self::to_dto).collect(),
        }
    }
}
