//! Prompt templates and user-facing fallback strings.
//!
//! The product is Brazilian-Portuguese; every string the model or the user
//! sees stays in pt-BR.

pub const DEFAULT_QUIZ_TOPIC: &str = "Odontologia Geral";

pub const SUMMARY_UNAVAILABLE: &str = "Não foi possível gerar o resumo no momento.";
pub const SUMMARY_ERROR: &str =
    "Ocorreu um erro ao comunicar com a IA. Verifique sua conexão ou tente novamente em alguns instantes.";

pub const GRADE_UNAVAILABLE: &str = "Não foi possível analisar a imagem.";
pub const GRADE_ERROR: &str =
    "Erro ao processar a imagem. Certifique-se de que a imagem é clara e tente novamente.";

pub const CHAT_UNAVAILABLE: &str = "Desculpe, não consegui processar sua resposta.";
pub const CHAT_ERROR: &str = "Erro de conexão. Tente novamente.";

pub const CHAT_SYSTEM_INSTRUCTION: &str = "Você é o assistente virtual inteligente da plataforma 'OdontoFuture AI'. Sua função é ajudar estudantes de odontologia. Você deve responder dúvidas sobre matérias odontológicas (anatomia, periodontia, cirurgia, etc), explicar termos técnicos e guiar o usuário sobre como usar o app (temos Resumos, Quiz e Corretor de Provas). Seja conciso, futurista e educado. Use emojis ocasionalmente. Responda sempre em Markdown.";

pub fn summary_prompt(topic: &str) -> String {
    format!(
        "Forneça um resumo técnico, conciso e estruturado sobre o tópico de odontologia: \"{}\". \
         Use marcadores para pontos chave. O tom deve ser profissional e educativo.",
        topic
    )
}

pub fn quiz_prompt(topic: &str) -> String {
    format!(
        "Gere uma questão de múltipla escolha difícil sobre {} para estudantes de odontologia.",
        topic
    )
}

pub const GRADER_PROMPT: &str = r#"Atue como um Corretor de Elite de Odontologia. Analise TODO o conteúdo desta imagem, identificando TODAS as questões presentes (sejam 1 ou várias).

Sua missão:
1. Ler o arquivo completo e identificar cada questão (Objetiva ou Subjetiva/Dissertativa).
2. Para questões OBJETIVAS: Identificar a alternativa correta com 100% de certeza.
3. Para questões SUBJETIVAS: Fornecer a resposta ideal/gabarito esperado.
4. Identificar a numeração original da questão na imagem.
5. Cruzar dados online para encontrar a banca/concurso de origem.

Formato de Resposta Obrigatório (Markdown):

---
### Questão [Número identificado na imagem]
**Tipo:** [Objetiva / Subjetiva]
**Enunciado Identificado:** [Breve trecho do início da questão]

**RESPOSTA CORRETA:**
[Se Objetiva: Letra e Texto da alternativa]
[Se Subjetiva: A resposta dissertativa ideal e completa]

**Origem:** [Banca/Ano/Concurso se encontrado]
**Explicação:** [Justificativa técnica baseada na literatura]
---
(Repita a estrutura acima para TODAS as questões encontradas na imagem)"#;
