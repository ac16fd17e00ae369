use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "departments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(120))")]
    pub name: String,
    /// Stored upper-cased, so a plain unique constraint is case-insensitive
    #[sea_orm(column_type = "String(StringLen::N(40))", unique)]
    pub code: String,
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(80))", nullable)]
    pub location: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(80))", nullable)]
    pub head: Option<String>,
    #[sea_orm(column_type = "Decimal(None)")]
    pub annual_budget: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employees::Entity")]
    Employees,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
