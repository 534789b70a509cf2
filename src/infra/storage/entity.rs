//! SeaORM entities for database tables

/// Dealer table
pub mod dealer {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "dealer")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub dealer_name: String,
        pub dealer_type: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Money market deal table
pub mod deal {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "money_market_deal")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub deal_number: String,
        pub trade_date: Option<Date>,
        pub settlement_date: Date,
        pub maturity_date: Date,
        #[sea_orm(column_type = "Decimal(Some((16, 2)))", nullable)]
        pub principal_amount: Option<Decimal>,
        #[sea_orm(column_type = "Decimal(Some((10, 6)))", nullable)]
        pub interest_rate: Option<Decimal>,
        pub currency: Option<String>,
        pub counterparty: Option<String>,
        pub active: bool,
        pub list_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::list::Entity",
            from = "Column::ListId",
            to = "super::list::Column::Id"
        )]
        List,
    }

    impl Related<super::list::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::List.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Join table for the deal <-> placeholder many-to-many association
pub mod deal_placeholder {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "deal_placeholder")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub deal_id: i64,
        #[sea_orm(primary_key, auto_increment = false)]
        pub placeholder_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::deal::Entity",
            from = "Column::DealId",
            to = "super::deal::Column::Id"
        )]
        Deal,
        #[sea_orm(
            belongs_to = "super::placeholder::Entity",
            from = "Column::PlaceholderId",
            to = "super::placeholder::Column::Id"
        )]
        Placeholder,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Money market list (upload batch) table
pub mod list {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "money_market_list")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub report_date: Date,
        pub upload_timestamp: Option<DateTimeUtc>,
        /// BatchStatus string form
        pub status: String,
        pub description: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::deal::Entity")]
        Deals,
    }

    impl Related<super::deal::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Deals.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Upload notification table
pub mod upload_notification {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "money_market_upload_notification")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub upload_timestamp: DateTimeUtc,
        pub file_name: Option<String>,
        pub record_count: Option<i32>,
        pub error_message: Option<String>,
        pub list_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::list::Entity",
            from = "Column::ListId",
            to = "super::list::Column::Id"
        )]
        List,
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Fiscal year table
pub mod fiscal_year {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "fiscal_year")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub year: i32,
        pub start_date: Option<Date>,
        pub end_date: Option<Date>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::fiscal_quarter::Entity")]
        Quarters,
    }

    impl Related<super::fiscal_quarter::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Quarters.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Fiscal quarter table
pub mod fiscal_quarter {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "fiscal_quarter")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub quarter_number: i32,
        pub start_date: Option<Date>,
        pub end_date: Option<Date>,
        pub fiscal_year_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::fiscal_year::Entity",
            from = "Column::FiscalYearId",
            to = "super::fiscal_year::Column::Id"
        )]
        Year,
        #[sea_orm(has_many = "super::fiscal_month::Entity")]
        Months,
    }

    impl Related<super::fiscal_year::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Year.def()
        }
    }

    impl Related<super::fiscal_month::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Months.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Fiscal month table
pub mod fiscal_month {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "fiscal_month")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub month_number: i32,
        pub start_date: Option<Date>,
        pub end_date: Option<Date>,
        pub fiscal_quarter_id: Option<i64>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::fiscal_quarter::Entity",
            from = "Column::FiscalQuarterId",
            to = "super::fiscal_quarter::Column::Id"
        )]
        Quarter,
    }

    impl Related<super::fiscal_quarter::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Quarter.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Report batch table
pub mod report_batch {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "report_batch")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub upload_timestamp: DateTimeUtc,
        /// BatchStatus string form
        pub status: String,
        pub checksum: Option<String>,
        pub uploaded_by: Option<Uuid>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Placeholder tag table
pub mod placeholder {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "placeholder")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub token: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
