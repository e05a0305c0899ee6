use clap::{Args, Subcommand};
use roster_core::{Address, Company, Geo, User, UserId};

#[derive(Subcommand)]
pub enum Commands {
    /// List users, filtered and paginated
    List {
        /// Case-insensitive search over name, username, email, phone and company
        #[arg(long, short, default_value = "")]
        query: String,

        /// Page number (out-of-range pages snap to the nearest valid one)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Page size (defaults to the configured size)
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Get a user by ID
    Get {
        /// User ID (number or local-... id)
        id: UserId,
    },

    /// Create a new user
    Create {
        #[command(flatten)]
        fields: UserFieldArgs,
    },

    /// Edit a user; only the given fields change
    Edit {
        /// User ID (number or local-... id)
        id: UserId,

        #[command(flatten)]
        fields: UserFieldArgs,
    },

    /// Delete a user
    Delete {
        /// User ID (number or local-... id)
        id: UserId,
    },

    /// Show local changes the server does not reflect
    Pending,
}

/// User fields as flat flags. Address, geo and company are spread out.
#[derive(Args, Debug, Default, Clone)]
pub struct UserFieldArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Username (3-20 letters, numbers, _ or -)
    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub suite: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub zipcode: Option<String>,

    /// Latitude (e.g., -37.3159)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,

    /// Longitude (e.g., 81.1496)
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,

    #[arg(long)]
    pub company_name: Option<String>,

    #[arg(long)]
    pub catch_phrase: Option<String>,

    #[arg(long)]
    pub bs: Option<String>,
}

impl UserFieldArgs {
    /// A new record holding only the given fields
    pub fn draft(&self) -> User {
        self.patch_for(&User::default())
    }

    /// Changes for `current`.
    ///
    /// Top-level fields are set only when given. Address and company are
    /// merged on top as whole objects, because edits replace them wholesale.
    pub fn patch_for(&self, current: &User) -> User {
        User {
            id: None,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
            address: self.address_for(current.address.as_ref()),
            company: self.company_for(current.company.as_ref()),
        }
    }

    fn address_for(&self, current: Option<&Address>) -> Option<Address> {
        let geo_given = self.lat.is_some() || self.lng.is_some();
        let given = geo_given
            || self.street.is_some()
            || self.suite.is_some()
            || self.city.is_some()
            || self.zipcode.is_some();
        if !given {
            return None;
        }

        let base = current.cloned().unwrap_or_default();
        let geo = if geo_given {
            let base_geo = base.geo.clone().unwrap_or_default();
            Some(Geo {
                lat: self.lat.clone().or(base_geo.lat),
                lng: self.lng.clone().or(base_geo.lng),
            })
        } else {
            base.geo
        };

        Some(Address {
            street: self.street.clone().or(base.street),
            suite: self.suite.clone().or(base.suite),
            city: self.city.clone().or(base.city),
            zipcode: self.zipcode.clone().or(base.zipcode),
            geo,
        })
    }

    fn company_for(&self, current: Option<&Company>) -> Option<Company> {
        if self.company_name.is_none() && self.catch_phrase.is_none() && self.bs.is_none() {
            return None;
        }

        let base = current.cloned().unwrap_or_default();
        Some(Company {
            name: self.company_name.clone().or(base.name),
            catch_phrase: self.catch_phrase.clone().or(base.catch_phrase),
            bs: self.bs.clone().or(base.bs),
        })
    }
}
