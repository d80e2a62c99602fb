use std::{sync::Arc, time::Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use indexmap::IndexMap;
use ratatui::layout::{Position, Rect};

use crate::{
    commit::PendingCommit,
    field::FieldMode,
    presentation::{self, FieldHit, UiContext},
    store::ValueSource,
};

use super::{
    binding::FieldBinding,
    input::{self, KeyAction},
    keymap::{self, KeymapContext},
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    title: Option<String>,
    bindings: Vec<FieldBinding>,
    focus: usize,
    source: Option<Box<dyn ValueSource>>,
    options: UiOptions,
    status: StatusLine,
    hits: Vec<FieldHit>,
    should_quit: bool,
}

impl App {
    pub fn new(
        title: Option<String>,
        mut bindings: Vec<FieldBinding>,
        source: Option<Box<dyn ValueSource>>,
        options: UiOptions,
    ) -> Self {
        for binding in &mut bindings {
            binding.field.set_notice_duration(options.notice_duration);
        }
        Self {
            title,
            bindings,
            focus: 0,
            source,
            options,
            status: StatusLine::new(),
            hits: Vec::new(),
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<IndexMap<String, String>> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.pump(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    terminal.resize(Rect::new(0, 0, width, height))?;
                }
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }
        drop(terminal);
        self.finish();
        Ok(self.values())
    }

    /// Final committed value of every field, keyed by binding key.
    pub fn values(&self) -> IndexMap<String, String> {
        self.bindings
            .iter()
            .map(|binding| (binding.key.clone(), binding.field.committed().to_string()))
            .collect()
    }

    fn context(&self) -> KeymapContext {
        self.bindings
            .get(self.focus)
            .map(|binding| binding.field.mode())
            .unwrap_or(FieldMode::Viewing)
            .into()
    }

    pub(crate) fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let context = self.context();
        let help = if self.options.show_help {
            keymap::help_text(context)
        } else {
            None
        };
        let tooltip = self
            .bindings
            .get(self.focus)
            .map(|binding| binding.field.tooltip(&self.options.messages));
        let fields = self
            .bindings
            .iter()
            .map(|binding| &binding.field)
            .collect::<Vec<_>>();
        self.hits = presentation::draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                fields,
                focus: self.focus,
                status_message: self.status.message(),
                help: help.as_deref(),
                tooltip: tooltip.as_deref(),
                messages: &self.options.messages,
            },
        );
    }

    /// Collects commit outcomes and external changes, then expires notices.
    pub(crate) fn pump(&mut self, now: Instant) {
        self.drain_commits(now);
        self.drain_external();
        for binding in &mut self.bindings {
            binding.field.tick(now);
        }
    }

    fn drain_commits(&mut self, now: Instant) {
        for binding in &mut self.bindings {
            let Some(outcome) = binding.pending.as_ref().and_then(PendingCommit::poll) else {
                continue;
            };
            binding.pending = None;
            if let Some(kind) = binding.field.resolve(&outcome, now) {
                self.status.resolved(binding.field.label(), kind);
            }
        }
    }

    fn drain_external(&mut self) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        let mut changed = 0;
        for (key, value) in source.poll_changes() {
            let Some(binding) = self.bindings.iter_mut().find(|binding| binding.key == key)
            else {
                continue;
            };
            if binding.field.committed() != value {
                changed += 1;
            }
            binding.field.observe(&value);
        }
        if changed > 0 {
            self.status.external_update(changed);
        }
    }

    /// Waits for in-flight commits; they always run to completion.
    fn finish(&mut self) {
        for binding in &mut self.bindings {
            if let Some(pending) = binding.pending.take() {
                tracing::info!(label = %binding.field.label(), "waiting for in-flight commit");
                let outcome = pending.wait();
                binding.field.resolve(&outcome, Instant::now());
            }
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match input::classify(&key, self.context()) {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::FieldStep(delta) => self.step_focus(delta),
            KeyAction::BeginEdit => self.begin_edit(),
            KeyAction::Confirm => self.confirm(),
            KeyAction::Cancel => self.cancel_editing(),
            KeyAction::Dismiss => self.dismiss_notice(),
            KeyAction::Input(key) => self.edit_input(&key),
        }
    }

    pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        let hit = self
            .hits
            .iter()
            .find(|hit| hit.area.contains(position))
            .map(|hit| hit.index);
        match hit {
            Some(index) => {
                if index != self.focus {
                    self.cancel_editing();
                    self.focus = index;
                }
                self.begin_edit();
            }
            None => self.cancel_editing(),
        }
    }

    fn step_focus(&mut self, delta: i32) {
        if self.bindings.is_empty() {
            return;
        }
        self.cancel_editing();
        let len = self.bindings.len() as i64;
        self.focus = (self.focus as i64 + i64::from(delta)).rem_euclid(len) as usize;
    }

    fn begin_edit(&mut self) {
        let Some(binding) = self.bindings.get_mut(self.focus) else {
            return;
        };
        if binding.field.request_edit() {
            self.status.editing(binding.field.label());
        } else if !binding.field.is_interactive() {
            self.status.busy(binding.field.label());
        }
    }

    fn confirm(&mut self) {
        let Some(binding) = self.bindings.get_mut(self.focus) else {
            return;
        };
        match binding.field.confirm() {
            Some(request) => {
                binding.pending = Some(PendingCommit::spawn(
                    Arc::clone(&binding.committer),
                    request,
                ));
                self.status.submitting(binding.field.label());
            }
            None => self.status.unchanged(binding.field.label()),
        }
    }

    /// Click-away: drops the draft of the focused field.
    fn cancel_editing(&mut self) {
        let Some(binding) = self.bindings.get_mut(self.focus) else {
            return;
        };
        if binding.field.cancel() {
            self.status.discarded(binding.field.label());
        }
    }

    fn dismiss_notice(&mut self) {
        if let Some(binding) = self.bindings.get_mut(self.focus)
            && binding.field.dismiss_notice()
        {
            return;
        }
        let newest = self
            .bindings
            .iter_mut()
            .filter(|binding| binding.field.notice().is_some())
            .max_by_key(|binding| binding.field.notice().map(|notice| notice.raised_at()));
        match newest {
            Some(binding) => {
                binding.field.dismiss_notice();
            }
            None => self.status.ready(),
        }
    }

    fn edit_input(&mut self, key: &KeyEvent) {
        let Some(binding) = self.bindings.get_mut(self.focus) else {
            return;
        };
        if !binding.field.is_interactive() {
            self.status.busy(binding.field.label());
        }
        binding.field.handle_key(key);
    }
}
