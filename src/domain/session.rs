//! 대화형 세션 상태(스코프 스택) 모델.

/// 대화형 여부와 진입한 스코프 스택을 보관한다.
/// 스코프 토큰은 이후 입력 앞에 암묵적으로 붙는다.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    interactive: bool,
    scopes: Vec<String>,
}

impl SessionContext {
    pub fn new(interactive: bool) -> Self {
        Self {
            interactive,
            scopes: Vec::new(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn enter(&mut self, scope: impl Into<String>) {
        self.scopes.push(scope.into());
    }

    /// 최상단 스코프를 빼서 반환한다. 비어 있으면 `None`.
    pub fn exit(&mut self) -> Option<String> {
        self.scopes.pop()
    }

    pub fn in_scope(&self, scope: &str) -> bool {
        self.scopes.last().is_some_and(|top| top == scope)
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// `userapp> ` 또는 `userapp:call> ` 형식의 프롬프트.
    pub fn prompt(&self) -> String {
        if self.scopes.is_empty() {
            "userapp> ".to_string()
        } else {
            format!("userapp:{}> ", self.scopes.join(":"))
        }
    }
}
