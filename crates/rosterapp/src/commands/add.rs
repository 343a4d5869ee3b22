use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::domains::{Domain, Member};
use crate::error::{Result, RosterError};
use crate::model::Entity;
use crate::store::DataStore;

/// The add-member form. Name, email, phone and club are required.
#[derive(Debug, Clone, Default)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub club: String,
    /// Defaults to `member`
    pub role: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    /// Comma separated
    pub interests: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl NewMember {
    fn validate(&self) -> Result<()> {
        let required = [&self.name, &self.email, &self.phone, &self.club];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(RosterError::Validation(
                "Please fill in all required fields.".into(),
            ));
        }
        Ok(())
    }

    /// Build the member as of `now`: the join date is `now` and the year is its year.
    pub fn into_member(self, now: DateTime<Utc>) -> Result<Member> {
        self.validate()?;
        let interests = self
            .interests
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Member {
            id: Uuid::new_v4().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            club: self.club.trim().to_string(),
            role: non_empty(self.role).unwrap_or_else(|| "member".to_string()),
            position: non_empty(self.position),
            year: i64::from(now.year()),
            avatar: None,
            location: non_empty(self.location).unwrap_or_default(),
            join_date: now,
            bio: non_empty(self.bio),
            interests,
        })
    }
}

pub fn run<S: DataStore>(store: &mut S, new: NewMember, now: DateTime<Utc>) -> Result<CmdResult> {
    let member = new.into_member(now)?;
    let data = store.load()?.with_member(member.clone())?;
    store.save(&data)?;

    let mut result = CmdResult::for_domain(Domain::Members);
    result.add_message(CmdMessage::success(format!(
        "{} has been added successfully!",
        member.name
    )));
    Ok(result.with_affected(vec![member.to_record()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use chrono::TimeZone;

    fn form() -> NewMember {
        NewMember {
            name: "Meera K".into(),
            email: "meera@example.com".into(),
            phone: "+91 90000 11111".into(),
            club: "Rotaract Club of KPRCAS".into(),
            interests: Some("Networking, , Fundraising ".into()),
            ..Default::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 4, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_add_member_defaults() {
        let mut store = StoreFixture::new().with_sample().store;
        let res = run(&mut store, form(), now()).unwrap();
        assert_eq!(
            res.messages[0].content,
            "Meera K has been added successfully!"
        );

        let data = store.load().unwrap();
        assert_eq!(data.members.len(), 7);
        let added = data.members.last().unwrap();
        assert_eq!(added.role, "member");
        assert_eq!(added.year, 2025);
        assert_eq!(added.join_date, now());
        assert_eq!(added.interests, vec!["Networking", "Fundraising"]);
        assert!(added.position.is_none());
    }

    #[test]
    fn test_missing_required_field() {
        let mut store = StoreFixture::new().store;
        let new = NewMember {
            club: "  ".into(),
            ..form()
        };
        let err = run(&mut store, new, now()).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields.");
        assert!(store.load().unwrap().members.is_empty());
    }

    #[test]
    fn test_explicit_role_kept() {
        let new = NewMember {
            role: Some("officer".into()),
            ..form()
        };
        let member = new.into_member(now()).unwrap();
        assert_eq!(member.role, "officer");
    }
}
