//! Generated-program builders for the code-runner tool
//!
//! Each builder turns an extracted value into a complete Python program.
//! The program text is an opaque parameter value from the engine's point of
//! view; only the sandboxed runner ever interprets it.

/// Escape a value for embedding inside a double-quoted Python string literal
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\'', "\\'")
        .replace('\n', " ")
}

/// Combined counting report over the literal query text: totals, character
/// classes, vowels/consonants, punctuation, and a top-10 frequency table.
/// Every count target is always included, so simultaneous targets ("vowels
/// and dots") merge into the one report.
pub fn counting_report(query: &str) -> String {
    format!(
        r##"# Universal Character Counter
text = "{query}"

print("=" * 50)
print("CHARACTER ANALYSIS")
print("=" * 50)

# Total counts
print(f"\nTotal characters: {{len(text)}}")
print(f"Total words: {{len(text.split())}}")

# Character type counts
letters = sum(c.isalpha() for c in text)
digits = sum(c.isdigit() for c in text)
spaces = sum(c.isspace() for c in text)
uppercase = sum(c.isupper() for c in text)
lowercase = sum(c.islower() for c in text)

print(f"\nLetters: {{letters}}")
print(f"Digits: {{digits}}")
print(f"Spaces: {{spaces}}")
print(f"Uppercase: {{uppercase}}")
print(f"Lowercase: {{lowercase}}")

# Vowels and consonants
vowels = 'aeiouAEIOU'
vowel_count = sum(c in vowels for c in text)
consonant_count = sum(c.isalpha() and c not in vowels for c in text)

print(f"\nVowels: {{vowel_count}}")
print(f"Consonants: {{consonant_count}}")

# Special characters
dots = text.count('.')
commas = text.count(',')
exclamations = text.count('!')
questions = text.count('?')

print(f"\nSPECIAL CHARACTERS:")
print(f"  Dots (.): {{dots}}")
print(f"  Commas (,): {{commas}}")
print(f"  Exclamations (!): {{exclamations}}")
print(f"  Questions (?): {{questions}}")

# Character frequency (top 10)
from collections import Counter
char_freq = Counter(text)
print(f"\nTOP 10 CHARACTERS:")
for char, count in char_freq.most_common(10):
    if char == ' ':
        print(f"  'space': {{count}}")
    elif char == '\n':
        print(f"  'newline': {{count}}")
    else:
        print(f"  '{{char}}': {{count}}")
"##,
        query = escape(query)
    )
}

/// Iterative factorial showing the full multiplication chain
pub fn factorial(n: &str) -> String {
    format!(
        r##"# Factorial Calculator
n = {n}
result = 1
for i in range(1, n + 1):
    result *= i

print(f"Factorial of {{n}}:")
print(f"{{n}}! = {{result}}")
print(f"\nCalculation: 1", end="")
for i in range(2, n + 1):
    print(f" × {{i}}", end="")
print(f" = {{result}}")"##
    )
}

/// First n Fibonacci terms plus their sum and last term
pub fn fibonacci(n: &str) -> String {
    format!(
        r##"# Fibonacci Sequence Generator
def fibonacci(n):
    fib = [0, 1]
    for i in range(2, n):
        fib.append(fib[i-1] + fib[i-2])
    return fib

n = {n}
result = fibonacci(n)

print(f"First {{n}} Fibonacci numbers:")
print(result)
print(f"\nSum: {{sum(result)}}")
print(f"Last number: {{result[-1]}}")"##
    )
}

/// Trial-division primes up to a bound, with count and maximum
pub fn primes(limit: &str) -> String {
    format!(
        r##"# Prime Number Finder
def is_prime(n):
    if n < 2:
        return False
    for i in range(2, int(n**0.5) + 1):
        if n % i == 0:
            return False
    return True

limit = {limit}
primes = [num for num in range(2, limit+1) if is_prime(num)]

print(f"Prime numbers up to {{limit}}:")
print(primes)
print(f"\nTotal count: {{len(primes)}}")
print(f"Largest prime: {{max(primes) if primes else 'None'}}")"##
    )
}

/// Case- and non-alphanumeric-insensitive palindrome check
pub fn palindrome_check(text: &str) -> String {
    format!(
        r##"# Palindrome Checker
text = "{text}"
cleaned = ''.join(c.lower() for c in text if c.isalnum())
is_palindrome = cleaned == cleaned[::-1]

print(f"Text: {{text}}")
print(f"Cleaned: {{cleaned}}")
print(f"Reversed: {{cleaned[::-1]}}")
print(f"\nIs palindrome? {{is_palindrome}}")"##,
        text = escape(text)
    )
}

/// Even numbers in 1..=limit with count and sum
pub fn even_numbers(limit: &str) -> String {
    format!(
        r##"# Even Numbers Generator
limit = {limit}
even_numbers = [i for i in range(1, limit+1) if i % 2 == 0]

print(f"Even numbers from 1 to {{limit}}:")
print(even_numbers)
print(f"\nCount: {{len(even_numbers)}}")
print(f"Sum: {{sum(even_numbers)}}")"##
    )
}

/// Odd numbers in 1..=limit with count and sum
pub fn odd_numbers(limit: &str) -> String {
    format!(
        r##"# Odd Numbers Generator
limit = {limit}
odd_numbers = [i for i in range(1, limit+1) if i % 2 != 0]

print(f"Odd numbers from 1 to {{limit}}:")
print(odd_numbers)
print(f"\nCount: {{len(odd_numbers)}}")
print(f"Sum: {{sum(odd_numbers)}}")"##
    )
}

/// Descriptive statistics over the literals found, in order of appearance
pub fn number_statistics(numbers: &[&str]) -> String {
    format!(
        r##"# Number Statistics Calculator
numbers = [{numbers}]

total = sum(numbers)
average = total / len(numbers)
maximum = max(numbers)
minimum = min(numbers)

print(f"Numbers: {{numbers}}")
print(f"\nStatistics:")
print(f"  Sum: {{total}}")
print(f"  Average: {{average:.2f}}")
print(f"  Count: {{len(numbers)}}")
print(f"  Maximum: {{maximum}}")
print(f"  Minimum: {{minimum}}")
print(f"  Range: {{maximum - minimum}}")"##,
        numbers = numbers.join(", ")
    )
}

/// Square of n, plus the square root of the result
pub fn square(n: &str) -> String {
    format!(
        r##"# Square Calculator
n = {n}
result = n ** 2

print(f"Square of {{n}}:")
print(f"{{n}}² = {{result}}")
print(f"\nAlso:")
print(f"  Square root of {{result}} = {{result ** 0.5:.2f}}")"##
    )
}

/// Cube of n, plus the cube root of the result
pub fn cube(n: &str) -> String {
    format!(
        r##"# Cube Calculator
n = {n}
result = n ** 3

print(f"Cube of {{n}}:")
print(f"{{n}}³ = {{result}}")
print(f"\nAlso:")
print(f"  Cube root of {{result}} = {{result ** (1/3):.2f}}")"##
    )
}

/// Power table for exponents 1 through 10
pub fn power_table(n: &str) -> String {
    format!(
        r##"# Power Calculator
n = {n}

print(f"Powers of {{n}}:")
for exp in range(1, 11):
    print(f"{{n}}^{{exp}} = {{n**exp}}")"##
    )
}

/// Reverse a string, reporting original, reversed, length, and a
/// case-insensitive palindrome flag
pub fn reverse_string(text: &str) -> String {
    format!(
        r##"# String Reverser
text = "{text}"
reversed_text = text[::-1]

print(f"Original: {{text}}")
print(f"Reversed: {{reversed_text}}")
print(f"\nLength: {{len(text)}}")
print(f"Is palindrome: {{text.lower() == reversed_text.lower()}}")"##,
        text = escape(text)
    )
}

/// Demonstration program for code requests no specific rule covers;
/// echoes the query as a comment so the human can edit it into shape
pub fn generic(query: &str) -> String {
    format!(
        r##"# Python Code Execution
# Your query: {query}

# Edit this code to do what you want
print("Python interpreter is ready!")
print("Modify the code below:")
print()

# Example operations:
text = "Hello World"
print(f"Text: {{text}}")
print(f"Uppercase: {{text.upper()}}")
print(f"Lowercase: {{text.lower()}}")
print(f"Length: {{len(text)}}")

# Math example:
numbers = [1, 2, 3, 4, 5]
print(f"\nNumbers: {{numbers}}")
print(f"Sum: {{sum(numbers)}}")
print(f"Average: {{sum(numbers)/len(numbers)}}")"##,
        query = query.replace('\n', " ")
    )
}
