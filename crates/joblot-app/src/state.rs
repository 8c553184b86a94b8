// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetMode {
    Nav,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterTab {
    AllOrders,
    Pending,
    Reviewed,
    Arrived,
}

impl FooterTab {
    pub const ALL: [Self; 4] = [Self::AllOrders, Self::Pending, Self::Reviewed, Self::Arrived];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AllOrders => "All Orders",
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Arrived => "Arrived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetState {
    pub mode: SheetMode,
    pub active_footer: FooterTab,
    pub status_line: Option<String>,
}

impl Default for SheetState {
    fn default() -> Self {
        Self {
            mode: SheetMode::Nav,
            active_footer: FooterTab::AllOrders,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCommand {
    EnterEditMode,
    ExitToNav,
    NextFooterTab,
    PrevFooterTab,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEvent {
    ModeChanged(SheetMode),
    FooterTabChanged(FooterTab),
    StatusUpdated(String),
    StatusCleared,
}

impl SheetState {
    pub fn dispatch(&mut self, command: SheetCommand) -> Vec<SheetEvent> {
        match command {
            SheetCommand::EnterEditMode => {
                self.mode = SheetMode::Edit;
                vec![SheetEvent::ModeChanged(self.mode)]
            }
            SheetCommand::ExitToNav => {
                self.mode = SheetMode::Nav;
                vec![SheetEvent::ModeChanged(self.mode)]
            }
            SheetCommand::NextFooterTab => self.rotate_footer(1),
            SheetCommand::PrevFooterTab => self.rotate_footer(-1),
            SheetCommand::SetStatus(message) => {
                self.status_line = Some(message.clone());
                vec![SheetEvent::StatusUpdated(message)]
            }
            SheetCommand::ClearStatus => {
                self.status_line = None;
                vec![SheetEvent::StatusCleared]
            }
        }
    }

    fn rotate_footer(&mut self, delta: isize) -> Vec<SheetEvent> {
        let tabs = FooterTab::ALL;
        let current = tabs
            .iter()
            .position(|tab| *tab == self.active_footer)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_footer = tabs[next];
        vec![SheetEvent::FooterTabChanged(self.active_footer)]
    }
}
