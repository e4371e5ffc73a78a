//! Values shared by the registration and directory flows.

use const_format::concatcp;

/// Azure Functions host used for local development.
pub const DEFAULT_HOST: &str = "http://localhost:7071";

pub const API_PREFIX: &str = "/api";

pub const DEFAULT_BASE_URL: &str = concatcp!(DEFAULT_HOST, API_PREFIX);

pub const REGISTER_PATH: &str = "register";
pub const USERS_PATH: &str = "users";

/// Query parameter used to filter the user list.
pub const REGION_PARAM: &str = "region";

/// Value the region select shows before a region is picked.
pub const REGION_PLACEHOLDER: &str = "== select a region ==";

/// Label used in the result heading when no filter was applied.
pub const ALL_REGIONS_LABEL: &str = "all";

pub const REGIONS: &[&str] = &[
    "Seoul",
    "Busan",
    "Incheon",
    "Daegu",
    "Daejeon",
    "Gwangju",
    "Ulsan",
    "Sejong",
    "Gyeonggi",
    "Gangwon",
    "Chungbuk",
    "Chungnam",
    "Jeonbuk",
    "Jeonnam",
    "Gyeongbuk",
    "Gyeongnam",
    "Jeju",
];

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email format.";
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration complete!";
pub const GENERIC_REGISTRATION_FAILURE: &str = "Registration failed.";
pub const REGISTRATION_FAILED_PREFIX: &str = "Registration failed: ";
pub const EMPTY_RESULT_MESSAGE: &str = "No users registered in this region.";
