//! データソースの状態遷移
//!
//! `Idle → Loading → {Ready | Failed}`。
//! 失敗時は直前に有効だったソースへ選択を戻し、表示中のデータは変えない。
//!
//! 読み込みが重なった場合は後から完了したものが勝つ。
//! 連番は古い完了をログで見分けるためだけに使う。

/// 読み込み状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// 進行中の読み込みを表す札
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub seq: u64,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct SourceTracker {
    state: LoadState,
    /// 最後に読み込みに成功したソース
    active: String,
    /// セレクタに表示中のソース
    selection: String,
    issued: u64,
    last_completed: u64,
}

impl SourceTracker {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            state: LoadState::Idle,
            active: initial.clone(),
            selection: initial,
            issued: 0,
            last_completed: 0,
        }
    }

    /// 読み込みを開始
    pub fn begin(&mut self, location: &str) -> LoadTicket {
        self.issued += 1;
        self.state = LoadState::Loading;
        self.selection = location.to_string();
        tracing::debug!(seq = self.issued, location, "読み込み開始");
        LoadTicket {
            seq: self.issued,
            location: location.to_string(),
        }
    }

    /// 読み込み成功
    pub fn complete(&mut self, ticket: &LoadTicket) {
        if ticket.seq < self.last_completed {
            tracing::debug!(
                seq = ticket.seq,
                newer = self.last_completed,
                "古い読み込みが後から完了"
            );
        }
        self.last_completed = self.last_completed.max(ticket.seq);
        self.state = LoadState::Ready;
        self.active = ticket.location.clone();
        self.selection = ticket.location.clone();
    }

    /// 読み込み失敗。選択を直前の有効なソースへ戻す
    pub fn fail(&mut self, ticket: &LoadTicket) -> &str {
        tracing::debug!(seq = ticket.seq, location = %ticket.location, "読み込み失敗");
        self.last_completed = self.last_completed.max(ticket.seq);
        self.state = LoadState::Failed;
        self.selection = self.active.clone();
        &self.selection
    }

    /// 読み込まずに選択を戻す（URL入力の取り消しなど）
    pub fn revert(&mut self) -> &str {
        self.selection = self.active.clone();
        &self.selection
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn selection(&self) -> &str {
        &self.selection
    }
}
