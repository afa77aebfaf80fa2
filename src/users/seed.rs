/**
 * Sample User Seed Set
 *
 * Fixed set of sample users inserted by the bulk-seed endpoint. Each one
 * gets the same last-name-derived default password as admin-added users.
 */

use crate::users::model::Role;

/// One entry of the fixed sample set
pub struct SeedUser {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub role: Role,
}

/// The fixed sample set inserted by `POST /user/seed/users`
pub const SAMPLE_USERS: &[SeedUser] = &[
    SeedUser {
        first_name: "Ada",
        last_name: "Lovelace",
        email: "ada.lovelace@example.com",
        role: Role::Admin,
    },
    SeedUser {
        first_name: "Grace",
        last_name: "Hopper",
        email: "grace.hopper@example.com",
        role: Role::User,
    },
    SeedUser {
        first_name: "Alan",
        last_name: "Turing",
        email: "alan.turing@example.com",
        role: Role::User,
    },
    SeedUser {
        first_name: "Katherine",
        last_name: "Johnson",
        email: "katherine.johnson@example.com",
        role: Role::User,
    },
    SeedUser {
        first_name: "Guest",
        last_name: "Account",
        email: "guest.account@example.com",
        role: Role::Guest,
    },
];
