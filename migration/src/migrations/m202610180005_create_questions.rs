use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610180005_create_questions"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("questions"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("question")).text().not_null())
                    .col(ColumnDef::new(Alias::new("answer")).text().not_null())
                    .col(ColumnDef::new(Alias::new("category")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("difficulty")).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("questions"), Alias::new("category"))
                            .to(Alias::new("categories"), Alias::new("id")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("questions")).to_owned())
            .await
    }
}
