use anyhow::Result;
use shared::{Child as SharedChild, ChildListResponse, CreateChildRequest, UpdateChildRequest};

use super::{format_date, parse_optional_date};
use crate::domain::commands::child::{CreateChildCommand, UpdateChildCommand};
use crate::domain::models::Child as DomainChild;

/// Mapper between child DTOs and domain children
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_create_command(family_id: String, request: CreateChildRequest) -> Result<CreateChildCommand> {
        Ok(CreateChildCommand {
            family_id,
            name: request.name,
            birth_date: parse_optional_date("birth_date", request.birth_date.as_deref())?,
            avatar: request.avatar,
        })
    }

    pub fn to_update_command(request: UpdateChildRequest) -> Result<UpdateChildCommand> {
        Ok(UpdateChildCommand {
            name: request.name,
            birth_date: parse_optional_date("birth_date", request.birth_date.as_deref())?,
            avatar: request.avatar,
        })
    }

    pub fn to_dto(domain: DomainChild) -> SharedChild {
        SharedChild {
            id: domain.id,
            family_id: domain.family_id,
            name: domain.name,
            birth_date: domain.birth_date.map(format_date),
            avatar: domain.avatar,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_list_response(children: Vec<DomainChild>) -> ChildListResponse {
        ChildListResponse {
            children: children.into_iter().map(Self::to_dto).collect(),
        }
    }
}
