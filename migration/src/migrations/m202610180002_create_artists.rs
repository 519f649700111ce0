use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610180002_create_artists"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("artists"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("city")).string_len(120))
                    .col(ColumnDef::new(Alias::new("state")).string_len(120))
                    .col(ColumnDef::new(Alias::new("phone")).string_len(120))
                    .col(ColumnDef::new(Alias::new("image_link")).string_len(500))
                    .col(ColumnDef::new(Alias::new("facebook_link")).string_len(120))
                    .col(ColumnDef::new(Alias::new("website")).string_len(120))
                    .col(
                        ColumnDef::new(Alias::new("seeking_venue"))
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Alias::new("seeking_description")).string_len(500))
                    .col(ColumnDef::new(Alias::new("genres")).json().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("artists")).to_owned())
            .await
    }
}
