//! Board view controller.
//!
//! Translates user actions on a board view into mutations. Every method
//! reads the snapshot it is given and never mutates board state directly;
//! changes become visible once the dispatcher's effect shows up in a later
//! snapshot.

use crate::{
    config::ControllerConfig,
    domain::{
        board::{PropertyOption, PropertyTemplate},
        card::{Card, CardId},
        snapshot::BoardSnapshot,
    },
    drag::DragSession,
    drop_resolver::{resolve_drop, DropResolution},
    error::{BoardViewError, Result},
    mutation::Mutation,
    storage::MutationDispatcher,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Callbacks into the presentation layer
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Opens a card, or closes the open card when `None`
    async fn show_card(&self, card: Option<&Card>);

    /// Shows the filter panel next to `anchor`
    fn show_filter_panel(&self, anchor: &str);

    /// Updates the active search text, `None` clearing it
    fn set_search_text(&self, text: Option<&str>);
}

/// An explicit user command, resolved against the snapshot at execution time
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    StartCardDrag(CardId),
    StartOptionDrag(String),
    EndDrag,
    DropOnColumn { target_option_id: Option<String> },
    OpenCard(Option<CardId>),
    AddCard { group_value: Option<String> },
    AddGroup,
    RenameGroup { option_id: String, value: String },
    RecolorGroup { option_id: String, color: String },
    DeleteGroup { option_id: String },
    ToggleProperty { property_id: String },
    GroupBy { property_id: String },
    RenameBoard { title: String },
    RenameView { title: String },
    SetBoardIcon { icon: Option<String> },
    BeginSearch,
    ChangeSearch { text: Option<String> },
    CancelSearch,
    ShowFilter { anchor: String },
}

pub struct BoardController {
    dispatcher: Arc<dyn MutationDispatcher>,
    presenter: Arc<dyn Presenter>,
    config: ControllerConfig,
    drag: DragSession,
    is_searching: bool,
}

impl BoardController {
    pub fn new(
        dispatcher: Arc<dyn MutationDispatcher>,
        presenter: Arc<dyn Presenter>,
        snapshot: &BoardSnapshot,
    ) -> Self {
        Self {
            dispatcher,
            presenter,
            config: ControllerConfig::default(),
            drag: DragSession::default(),
            is_searching: snapshot.view.search_text.is_some(),
        }
    }

    pub fn with_config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// Runs a single command
    pub async fn execute(&mut self, snapshot: &BoardSnapshot, command: BoardCommand) -> Result<()> {
        match command {
            BoardCommand::StartCardDrag(card_id) => self.start_card_drag(card_id),
            BoardCommand::StartOptionDrag(option_id) => self.start_option_drag(option_id),
            BoardCommand::EndDrag => self.end_drag(),
            BoardCommand::DropOnColumn { target_option_id } => {
                self.drop_on_column(snapshot, target_option_id.as_deref())
                    .await?;
            }
            BoardCommand::OpenCard(card_id) => {
                let card = card_id.as_ref().and_then(|id| snapshot.card(id));
                self.presenter.show_card(card).await;
            }
            BoardCommand::AddCard { group_value } => {
                self.add_card(snapshot, group_value.as_deref()).await?;
            }
            BoardCommand::AddGroup => {
                self.add_group(snapshot).await?;
            }
            BoardCommand::RenameGroup { option_id, value } => {
                self.rename_group(snapshot, &option_id, value).await?
            }
            BoardCommand::RecolorGroup { option_id, color } => {
                self.recolor_group(snapshot, &option_id, color).await?
            }
            BoardCommand::DeleteGroup { option_id } => {
                self.delete_group(snapshot, &option_id).await?
            }
            BoardCommand::ToggleProperty { property_id } => {
                self.toggle_property_visibility(snapshot, &property_id)
                    .await?
            }
            BoardCommand::GroupBy { property_id } => {
                self.change_group_by(snapshot, &property_id).await?;
            }
            BoardCommand::RenameBoard { title } => self.rename_board(title).await?,
            BoardCommand::RenameView { title } => self.rename_view(snapshot, title).await?,
            BoardCommand::SetBoardIcon { icon } => self.set_board_icon(icon).await?,
            BoardCommand::BeginSearch => self.begin_search(),
            BoardCommand::ChangeSearch { text } => self.search_changed(text.as_deref()),
            BoardCommand::CancelSearch => self.cancel_search(),
            BoardCommand::ShowFilter { anchor } => self.show_filter(&anchor),
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------

    pub fn start_card_drag(&mut self, card_id: CardId) {
        self.drag.start_card(card_id);
    }

    pub fn start_option_drag(&mut self, option_id: impl Into<String>) {
        self.drag.start_option(option_id);
    }

    /// Drag ended without a drop
    pub fn end_drag(&mut self) {
        self.drag.cancel();
    }

    /// Handles a drop on a column, `None` being the "no value" column.
    ///
    /// The session is idle again once this returns, whatever the outcome.
    pub async fn drop_on_column(
        &mut self,
        snapshot: &BoardSnapshot,
        target_option_id: Option<&str>,
    ) -> Result<DropResolution> {
        let subject = self.drag.take();
        let resolution = resolve_drop(&subject, target_option_id, snapshot)?;

        if let DropResolution::Mutate(mutation) = &resolution {
            self.dispatch(mutation.clone()).await?;
        }
        Ok(resolution)
    }

    // ------------------------------------------------------------------
    // Cards
    // ------------------------------------------------------------------

    /// Creates a card in the column for `group_value`.
    ///
    /// The card starts with values that keep it visible under the view's
    /// filter. On success the new card is opened; on failure the open card
    /// is closed and the error returned.
    pub async fn add_card(&self, snapshot: &BoardSnapshot, group_value: Option<&str>) -> Result<Card> {
        let properties = snapshot
            .view
            .filter
            .properties_that_meet(&snapshot.board.card_properties);
        let mut card = Card::new(&snapshot.board.id, properties);
        if let Some(property) = snapshot.group_by_property() {
            card.set_value(&property.id, group_value.map(str::to_string));
        }

        match self.dispatch(Mutation::InsertCard { card: card.clone() }).await {
            Ok(()) => {
                self.presenter.show_card(Some(&card)).await;
                Ok(card)
            }
            Err(e) => {
                self.presenter.show_card(None).await;
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------

    /// Appends a new option to the grouping property
    pub async fn add_group(&self, snapshot: &BoardSnapshot) -> Result<PropertyOption> {
        let property = grouping_property(snapshot)?;
        let option = PropertyOption::new(
            self.config.new_group_label.clone(),
            self.config.new_group_color.clone(),
        );

        self.dispatch(Mutation::InsertPropertyOption {
            property_id: property.id.clone(),
            option: option.clone(),
        })
        .await?;
        Ok(option)
    }

    /// Changes the label of a group; cards keep their membership
    pub async fn rename_group(
        &self,
        snapshot: &BoardSnapshot,
        option_id: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        let property = grouping_option(snapshot, option_id)?;
        self.dispatch(Mutation::ChangePropertyOptionValue {
            property_id: property.id.clone(),
            option_id: option_id.to_string(),
            value: value.into(),
        })
        .await
    }

    pub async fn recolor_group(
        &self,
        snapshot: &BoardSnapshot,
        option_id: &str,
        color: impl Into<String>,
    ) -> Result<()> {
        let property = grouping_option(snapshot, option_id)?;
        self.dispatch(Mutation::ChangePropertyOptionColor {
            property_id: property.id.clone(),
            option_id: option_id.to_string(),
            color: color.into(),
        })
        .await
    }

    /// Removes a group. Its cards are not rewritten and show up in the
    /// "no value" column once the deletion lands.
    pub async fn delete_group(&self, snapshot: &BoardSnapshot, option_id: &str) -> Result<()> {
        let property = grouping_option(snapshot, option_id)?;
        tracing::info!("Delete group {} of {}", option_id, property.name);
        self.dispatch(Mutation::DeletePropertyOption {
            property_id: property.id.clone(),
            option_id: option_id.to_string(),
        })
        .await
    }

    // ------------------------------------------------------------------
    // View and board metadata
    // ------------------------------------------------------------------

    pub async fn toggle_property_visibility(
        &self,
        snapshot: &BoardSnapshot,
        property_id: &str,
    ) -> Result<()> {
        let property = snapshot
            .board
            .property(property_id)
            .ok_or_else(|| BoardViewError::PropertyNotFound(property_id.to_string()))?;
        tracing::debug!(
            "Toggle property {} (visible: {})",
            property.name,
            snapshot.view.is_property_visible(property_id)
        );

        self.dispatch(Mutation::ChangeViewVisibleProperties {
            view_id: snapshot.view.id.clone(),
            property_ids: snapshot.view.toggled_visible_property_ids(property_id),
        })
        .await
    }

    /// Switches the grouping property. Returns `false` without dispatching
    /// when it is already active.
    pub async fn change_group_by(&self, snapshot: &BoardSnapshot, property_id: &str) -> Result<bool> {
        if snapshot.view.group_by_property_id.as_deref() == Some(property_id) {
            return Ok(false);
        }

        let property = snapshot
            .board
            .property(property_id)
            .ok_or_else(|| BoardViewError::PropertyNotFound(property_id.to_string()))?;
        if !property.is_select() {
            return Err(BoardViewError::NotSelectProperty(property_id.to_string()));
        }

        self.dispatch(Mutation::ChangeViewGroupBy {
            view_id: snapshot.view.id.clone(),
            property_id: property_id.to_string(),
        })
        .await?;
        Ok(true)
    }

    pub async fn rename_board(&self, title: impl Into<String>) -> Result<()> {
        self.dispatch(Mutation::ChangeBoardTitle {
            title: title.into(),
        })
        .await
    }

    pub async fn rename_view(&self, snapshot: &BoardSnapshot, title: impl Into<String>) -> Result<()> {
        self.dispatch(Mutation::ChangeViewTitle {
            view_id: snapshot.view.id.clone(),
            title: title.into(),
        })
        .await
    }

    pub async fn set_board_icon(&self, icon: Option<String>) -> Result<()> {
        self.dispatch(Mutation::ChangeBoardIcon { icon }).await
    }

    // ------------------------------------------------------------------
    // Search and filter
    // ------------------------------------------------------------------

    pub fn begin_search(&mut self) {
        self.is_searching = true;
    }

    pub fn search_changed(&self, text: Option<&str>) {
        self.presenter.set_search_text(text);
    }

    /// Hides the search input and clears the search
    pub fn cancel_search(&mut self) {
        self.is_searching = false;
        self.presenter.set_search_text(None);
    }

    pub fn show_filter(&self, anchor: &str) {
        self.presenter.show_filter_panel(anchor);
    }

    async fn dispatch(&self, mutation: Mutation) -> Result<()> {
        let label = mutation.undo_label();
        tracing::info!("Dispatch '{}'", label);

        self.dispatcher
            .dispatch(mutation, label)
            .await
            .map_err(|e| {
                tracing::warn!("Mutation '{}' failed: {}", label, e);
                BoardViewError::DispatchFailed {
                    label: label.to_string(),
                    reason: e.to_string(),
                }
            })
    }
}

fn grouping_property(snapshot: &BoardSnapshot) -> Result<&PropertyTemplate> {
    snapshot
        .group_by_property()
        .ok_or(BoardViewError::NoGroupingProperty)
}

fn grouping_option<'a>(snapshot: &'a BoardSnapshot, option_id: &str) -> Result<&'a PropertyTemplate> {
    let property = grouping_property(snapshot)?;
    if property.option(option_id).is_none() {
        return Err(BoardViewError::OptionNotFound(option_id.to_string()));
    }
    Ok(property)
}
