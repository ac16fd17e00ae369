use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub department_id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(60))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(60))")]
    pub last_name: String,
    /// Stored lower-cased, so a plain unique constraint is case-insensitive
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(80))", nullable)]
    pub job_title: Option<String>,
    /// One of `ACTIVE`, `ON_LEAVE`, `TERMINATED`
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Departments,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Departments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
