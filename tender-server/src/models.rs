use {
    crate::kernel::entities::Address,
    anyhow::anyhow,
    sqlx::FromRow,
    uuid::Uuid,
};

pub type ProfileId = Uuid;
pub type AccessTokenToken = String;

#[derive(Clone, Debug, PartialEq)]
pub struct EmailAddress(pub email_address::EmailAddress);

impl TryFrom<String> for EmailAddress {
    type Error = anyhow::Error;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(EmailAddress(
            value.parse().map_err(|_| anyhow!("invalid email address"))?,
        ))
    }
}

#[derive(Clone, Debug)]
pub struct Profile {
    pub id:      ProfileId,
    pub name:    String,
    pub email:   EmailAddress,
    pub address: Address,
}

#[derive(Clone, FromRow, Debug)]
pub struct ProfileRow {
    pub id:      Uuid,
    pub name:    String,
    pub email:   String,
    pub address: String,
}

impl ProfileRow {
    pub fn get_profile(&self) -> anyhow::Result<Profile> {
        Ok(Profile {
            id:      self.id,
            name:    self.name.clone(),
            email:   self.email.clone().try_into()?,
            address: self.address.clone(),
        })
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct AccessToken {
    pub id:         Uuid,
    pub profile_id: ProfileId,
    pub token:      AccessTokenToken,
}
