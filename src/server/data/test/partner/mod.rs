use crate::server::{
    data::partner::PartnerRepository,
    model::partner::{CreatePartnerParam, UpdatePartnerParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all_paginated;
